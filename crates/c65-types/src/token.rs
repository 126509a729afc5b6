//! Type tokens: the 16-bit cells of an encoded type string.
//!
//! A tag token packs disjoint bit fields:
//!
//! | Bits        | Mask     | Field                          |
//! | ----------- | -------- | ------------------------------ |
//! | 0-4         | `0x001F` | base kind                      |
//! | 5-7         | `0x00E0` | class                          |
//! | 8-9         | `0x0300` | signedness                     |
//! | 10-11       | `0x0C00` | size modifier                  |
//! | 12-13       | `0x3000` | qualifiers (const, volatile)   |
//! | 15          | `0x8000` | payload marker (never on tags) |
//!
//! The sentinel `Token::END` is all zeroes; a payload chunk always has bit 15
//! set, so even an encoded zero cannot be mistaken for the sentinel.

use bitflags::bitflags;

const MASK_KIND: u16 = 0x001F;
const MASK_CLASS: u16 = 0x00E0;
const MASK_SIGN: u16 = 0x0300;
const MASK_QUAL: u16 = 0x3000;

pub(crate) const PAYLOAD_MARKER: u16 = 0x8000;
pub(crate) const CHUNK_MASK: u16 = 0x7FFF;

const KIND_CHAR: u16 = 0x0001;
const KIND_SHORT: u16 = 0x0002;
const KIND_INT: u16 = 0x0003;
const KIND_LONG: u16 = 0x0004;
const KIND_LONGLONG: u16 = 0x0005;
const KIND_ENUM: u16 = 0x0006;
const KIND_FLOAT: u16 = 0x0007;
const KIND_DOUBLE: u16 = 0x0008;
const KIND_VOID: u16 = 0x0009;
const KIND_STRUCT: u16 = 0x000A;
const KIND_UNION: u16 = 0x000B;
const KIND_ARRAY: u16 = 0x000C;
const KIND_PTR: u16 = 0x000D;
const KIND_FUNC: u16 = 0x000E;

const CLASS_NONE: u16 = 0x0000;
const CLASS_INT: u16 = 0x0020;
const CLASS_FLOAT: u16 = 0x0040;
const CLASS_PTR: u16 = 0x0060;
const CLASS_STRUCT: u16 = 0x0080;
const CLASS_FUNC: u16 = 0x00A0;

const SIGN_UNSIGNED: u16 = 0x0100;
const SIGN_SIGNED: u16 = 0x0200;

const SIZE_SHORT: u16 = 0x0400;
const SIZE_LONG: u16 = 0x0800;
const SIZE_LONGLONG: u16 = 0x0C00;

bitflags! {
    /// Type qualifiers. The bits are the token's own qualifier bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Qualifiers: u16 {
        const CONST = 0x1000;
        const VOLATILE = 0x2000;
    }
}

/// One cell of a type string: a tag, a payload chunk, or the sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Token(u16);

impl Token {
    /// Terminates every type string.
    pub const END: Self = Self(0);

    pub const SCHAR: Self = Self(KIND_CHAR | CLASS_INT | SIGN_SIGNED);
    pub const UCHAR: Self = Self(KIND_CHAR | CLASS_INT | SIGN_UNSIGNED);
    pub const SHORT: Self = Self(KIND_SHORT | CLASS_INT | SIGN_SIGNED | SIZE_SHORT);
    pub const USHORT: Self = Self(KIND_SHORT | CLASS_INT | SIGN_UNSIGNED | SIZE_SHORT);
    pub const INT: Self = Self(KIND_INT | CLASS_INT | SIGN_SIGNED);
    pub const UINT: Self = Self(KIND_INT | CLASS_INT | SIGN_UNSIGNED);
    pub const LONG: Self = Self(KIND_LONG | CLASS_INT | SIGN_SIGNED | SIZE_LONG);
    pub const ULONG: Self = Self(KIND_LONG | CLASS_INT | SIGN_UNSIGNED | SIZE_LONG);
    pub const LONGLONG: Self = Self(KIND_LONGLONG | CLASS_INT | SIGN_SIGNED | SIZE_LONGLONG);
    pub const ULONGLONG: Self = Self(KIND_LONGLONG | CLASS_INT | SIGN_UNSIGNED | SIZE_LONGLONG);
    pub const ENUM: Self = Self(KIND_ENUM | CLASS_INT | SIGN_SIGNED);
    pub const FLOAT: Self = Self(KIND_FLOAT | CLASS_FLOAT);
    pub const DOUBLE: Self = Self(KIND_DOUBLE | CLASS_FLOAT);
    pub const VOID: Self = Self(KIND_VOID | CLASS_NONE);
    pub const STRUCT: Self = Self(KIND_STRUCT | CLASS_STRUCT);
    pub const UNION: Self = Self(KIND_UNION | CLASS_STRUCT);
    pub const ARRAY: Self = Self(KIND_ARRAY | CLASS_PTR);
    pub const PTR: Self = Self(KIND_PTR | CLASS_PTR);
    pub const FUNC: Self = Self(KIND_FUNC | CLASS_FUNC);

    /// Wrap a raw token value. Use only for deserialization and tests.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw 16-bit value.
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// A payload chunk carrying the low 15 bits of `chunk`.
    #[inline]
    pub const fn payload(chunk: u16) -> Self {
        Self((chunk & CHUNK_MASK) | PAYLOAD_MARKER)
    }

    /// The 15-bit value of a payload chunk.
    #[inline]
    pub const fn chunk(self) -> u16 {
        self.0 & CHUNK_MASK
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_payload(self) -> bool {
        self.0 & PAYLOAD_MARKER != 0
    }

    /// Base kind of a tag token. `None` for payload chunks, the sentinel, and
    /// unassigned kind values.
    pub fn kind(self) -> Option<BaseKind> {
        if self.is_payload() {
            return None;
        }
        BaseKind::from_bits(self.0 & MASK_KIND)
    }

    /// Class of a tag token. `None` for payload chunks and unassigned classes.
    pub fn class(self) -> Option<TypeClass> {
        if self.is_payload() {
            return None;
        }
        TypeClass::from_bits(self.0 & MASK_CLASS)
    }

    pub fn qualifiers(self) -> Qualifiers {
        if self.is_payload() {
            return Qualifiers::empty();
        }
        Qualifiers::from_bits_truncate(self.0 & MASK_QUAL)
    }

    /// The tag with its qualifier bits cleared.
    #[inline]
    pub const fn unqualified(self) -> Self {
        if self.is_payload() {
            return self;
        }
        Self(self.0 & !MASK_QUAL)
    }

    /// The tag with `qualifiers` added to its own.
    pub fn with_qualifiers(self, qualifiers: Qualifiers) -> Self {
        debug_assert!(!self.is_payload(), "qualifying a payload chunk");
        Self(self.0 | qualifiers.bits())
    }

    pub const fn is_unsigned(self) -> bool {
        !self.is_payload() && self.0 & MASK_SIGN == SIGN_UNSIGNED
    }

    pub const fn is_signed(self) -> bool {
        !self.is_payload() && self.0 & MASK_SIGN == SIGN_SIGNED
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({:04X})", self.0)
    }
}

impl std::fmt::UpperHex for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Base kind of a tag token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u16)]
pub enum BaseKind {
    Char = KIND_CHAR,
    Short = KIND_SHORT,
    Int = KIND_INT,
    Long = KIND_LONG,
    LongLong = KIND_LONGLONG,
    Enum = KIND_ENUM,
    Float = KIND_FLOAT,
    Double = KIND_DOUBLE,
    Void = KIND_VOID,
    Struct = KIND_STRUCT,
    Union = KIND_UNION,
    Array = KIND_ARRAY,
    Ptr = KIND_PTR,
    Func = KIND_FUNC,
}

impl BaseKind {
    /// Convert from the kind bits of a tag.
    pub fn from_bits(v: u16) -> Option<Self> {
        match v {
            KIND_CHAR => Some(Self::Char),
            KIND_SHORT => Some(Self::Short),
            KIND_INT => Some(Self::Int),
            KIND_LONG => Some(Self::Long),
            KIND_LONGLONG => Some(Self::LongLong),
            KIND_ENUM => Some(Self::Enum),
            KIND_FLOAT => Some(Self::Float),
            KIND_DOUBLE => Some(Self::Double),
            KIND_VOID => Some(Self::Void),
            KIND_STRUCT => Some(Self::Struct),
            KIND_UNION => Some(Self::Union),
            KIND_ARRAY => Some(Self::Array),
            KIND_PTR => Some(Self::Ptr),
            KIND_FUNC => Some(Self::Func),
            _ => None,
        }
    }

    /// Whether a tag of this kind is followed by an embedded payload.
    ///
    /// Arrays carry their element count, functions their descriptor, and
    /// structs/unions their symbol table entry.
    pub fn has_payload(self) -> bool {
        matches!(self, Self::Array | Self::Func | Self::Struct | Self::Union)
    }

    /// Whether this kind names a scalar (no payload, no nested type).
    pub fn is_scalar(self) -> bool {
        !self.has_payload() && self != Self::Ptr
    }

    /// C keyword for scalar kinds.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Char => Some("char"),
            Self::Short => Some("short"),
            Self::Int => Some("int"),
            Self::Long => Some("long"),
            Self::LongLong => Some("long long"),
            Self::Enum => Some("enum"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            Self::Void => Some("void"),
            _ => None,
        }
    }
}

/// Class of a tag token. Arrays and pointers share `Ptr`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u16)]
pub enum TypeClass {
    None = CLASS_NONE,
    Int = CLASS_INT,
    Float = CLASS_FLOAT,
    Ptr = CLASS_PTR,
    Struct = CLASS_STRUCT,
    Func = CLASS_FUNC,
}

impl TypeClass {
    /// Convert from the class bits of a tag.
    pub fn from_bits(v: u16) -> Option<Self> {
        match v {
            CLASS_NONE => Some(Self::None),
            CLASS_INT => Some(Self::Int),
            CLASS_FLOAT => Some(Self::Float),
            CLASS_PTR => Some(Self::Ptr),
            CLASS_STRUCT => Some(Self::Struct),
            CLASS_FUNC => Some(Self::Func),
            _ => None,
        }
    }
}
