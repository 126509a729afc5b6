//! Values embedded in a type string.
//!
//! Array lengths and descriptor references travel inside the token stream as
//! `PAYLOAD_LEN` chunks of 15 bits, least significant chunk first, each with
//! the payload marker set. Two chunks cover the 16-bit address space of the
//! target with room to spare; wider values are truncated, the way the target
//! would truncate an address.

use crate::token::Token;

/// Number of tokens in an embedded value.
pub const PAYLOAD_LEN: usize = 2;

/// Bits carried by one payload chunk.
pub const CHUNK_BITS: u32 = 15;

/// Bits carried by a complete embedded value.
pub const PAYLOAD_BITS: u32 = CHUNK_BITS * PAYLOAD_LEN as u32;

/// Largest value that survives `encode` unchanged.
pub const PAYLOAD_MAX: u32 = (1 << PAYLOAD_BITS) - 1;

const CHUNK_MASK: u32 = (1 << CHUNK_BITS) - 1;

/// Encode `value` into payload tokens.
pub fn encode(value: u32) -> [Token; PAYLOAD_LEN] {
    let mut out = [Token::END; PAYLOAD_LEN];
    encode_into(&mut out, value);
    out
}

/// Encode `value` into the first `PAYLOAD_LEN` slots of `dst`.
pub fn encode_into(dst: &mut [Token], mut value: u32) {
    for slot in &mut dst[..PAYLOAD_LEN] {
        *slot = Token::payload((value & CHUNK_MASK) as u16);
        value >>= CHUNK_BITS;
    }
}

/// Decode the value held in the first `PAYLOAD_LEN` tokens of `src`.
pub fn decode(src: &[Token]) -> u32 {
    src[..PAYLOAD_LEN].iter().rev().fold(0, |acc, token| {
        debug_assert!(token.is_payload(), "decoding non-payload token {token:?}");
        (acc << CHUNK_BITS) | u32::from(token.chunk())
    })
}

/// Copy an embedded value verbatim from `src` to `dst`.
pub fn copy_payload(src: &[Token], dst: &mut [Token]) {
    dst[..PAYLOAD_LEN].copy_from_slice(&src[..PAYLOAD_LEN]);
}
