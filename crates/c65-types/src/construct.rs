//! Type constructors.
//!
//! Built-in scalars are `'static` views. Everything else is built into a
//! fresh `TypeString` sized exactly for its contents.

use c65_core::Target;

use crate::codec::{self, PAYLOAD_LEN, PAYLOAD_MAX};
use crate::invariants;
use crate::symtab::{FuncDesc, FuncFlags, FuncId, SymId, SymbolTable};
use crate::token::{BaseKind, Qualifiers, Token};
use crate::type_str::{TypeStr, TypeString};

pub const TYPE_UCHAR: TypeStr<'static> = TypeStr::new(&[Token::UCHAR, Token::END]);
pub const TYPE_INT: TypeStr<'static> = TypeStr::new(&[Token::INT, Token::END]);
pub const TYPE_UINT: TypeStr<'static> = TypeStr::new(&[Token::UINT, Token::END]);
pub const TYPE_LONG: TypeStr<'static> = TypeStr::new(&[Token::LONG, Token::END]);
pub const TYPE_ULONG: TypeStr<'static> = TypeStr::new(&[Token::ULONG, Token::END]);
pub const TYPE_VOID: TypeStr<'static> = TypeStr::new(&[Token::VOID, Token::END]);
/// The type of `sizeof` expressions.
pub const TYPE_SIZE_T: TypeStr<'static> = TypeStr::new(&[Token::UINT, Token::END]);

/// Element count marking an array declared without a size: `int a[]`.
///
/// Decoded back, it surfaces as a count of `-1`.
pub const UNSPECIFIED_COUNT: u32 = PAYLOAD_MAX;

/// Plain `char` under the target's signedness policy.
pub fn default_char(target: &Target) -> Token {
    if target.signed_chars {
        Token::SCHAR
    } else {
        Token::UCHAR
    }
}

/// `T[count]`, or `T[]` when `count` is `None`.
///
/// Counts are truncated to the payload width; a count equal to
/// `UNSPECIFIED_COUNT` reads back as unspecified.
pub fn array_of(element: TypeStr<'_>, count: Option<u32>) -> TypeString {
    let mut prefix = [Token::ARRAY; 1 + PAYLOAD_LEN];
    codec::encode_into(&mut prefix[1..], count.unwrap_or(UNSPECIFIED_COUNT));
    TypeString::from_parts(&prefix, element)
}

/// `char[len]` with the element signedness fixed now, from `target`.
pub fn char_array_type(len: u32, target: &Target) -> TypeString {
    let element = [default_char(target), Token::END];
    let ty = array_of(TypeStr::new(&element), Some(len));
    tracing::trace!(len, signed = target.signed_chars, "char array type");
    ty
}

/// Function type with descriptor `desc` returning `returns`.
pub fn function_type(desc: FuncId, returns: TypeStr<'_>) -> TypeString {
    let mut prefix = [Token::FUNC; 1 + PAYLOAD_LEN];
    codec::encode_into(&mut prefix[1..], desc.as_u32());
    TypeString::from_parts(&prefix, returns)
}

/// Type of a function called before any declaration: `int f()`, variadic.
///
/// The descriptor is created in `symbols`. A later declaration replaces the
/// type; its calling convention is not checked against this one.
pub fn implicit_function_type<S>(symbols: &mut S) -> TypeString
where
    S: SymbolTable + ?Sized,
{
    let flags = FuncFlags::IMPLICIT | FuncFlags::EMPTY | FuncFlags::VARIADIC;
    let desc = symbols.add_function(FuncDesc::new(flags));
    tracing::trace!(desc = desc.as_u32(), "implicit function type");
    function_type(desc, TYPE_INT)
}

/// `T *`. Always a fresh buffer of `len(T) + 2` tokens.
pub fn pointer_to(pointee: TypeStr<'_>) -> TypeString {
    TypeString::from_parts(&[Token::PTR], pointee)
}

pub fn struct_type(entry: SymId) -> TypeString {
    aggregate_type(Token::STRUCT, entry)
}

pub fn union_type(entry: SymId) -> TypeString {
    aggregate_type(Token::UNION, entry)
}

fn aggregate_type(tag: Token, entry: SymId) -> TypeString {
    let mut tokens = [Token::END; 2 + PAYLOAD_LEN];
    tokens[0] = tag;
    codec::encode_into(&mut tokens[1..], entry.as_u32());
    TypeStr::new(&tokens).to_type_string()
}

/// Copy of `ty` with `qualifiers` added to the object type.
///
/// Arrays carry no qualifiers of their own; they go on the element type.
pub fn qualified(ty: TypeStr<'_>, qualifiers: Qualifiers) -> TypeString {
    let mut out = ty.to_type_string();
    let tokens = out.tokens_mut();
    let mut at = 0;
    while tokens[at].kind() == Some(BaseKind::Array) {
        at += 1 + PAYLOAD_LEN;
    }
    if tokens[at].is_end() {
        invariants::unexpected_type("qualified", "object", tokens[at]);
    }
    tokens[at] = tokens[at].with_qualifiers(qualifiers);
    out
}
