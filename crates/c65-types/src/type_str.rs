//! Type strings: owned buffers and borrowed views.
//!
//! A type string is a run of tokens closed by `Token::END`. `TypeString`
//! owns a fixed-size buffer; `TypeStr` borrows a suffix of one. Every
//! sub-type (pointee, element type, return type) is such a suffix, so it is
//! a complete type string on its own and never needs copying to be used.

use crate::codec::PAYLOAD_LEN;
use crate::invariants;
use crate::token::Token;

/// Borrowed view of a type string.
///
/// The slice starts at the type's leading tag and runs through (at least)
/// its terminator. Trailing tokens after the terminator are ignored.
#[derive(Clone, Copy)]
pub struct TypeStr<'a> {
    tokens: &'a [Token],
}

impl<'a> TypeStr<'a> {
    /// View `tokens` as a type string. The slice must contain `Token::END`.
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    /// Number of tokens before the terminator.
    pub fn len(self) -> usize {
        self.tokens
            .iter()
            .position(|t| t.is_end())
            .unwrap_or_else(|| invariants::missing_sentinel())
    }

    /// True for the empty string (terminator only).
    pub fn is_empty(self) -> bool {
        self.head().is_end()
    }

    /// Leading tag.
    pub fn head(self) -> Token {
        match self.tokens.first() {
            Some(&t) => t,
            None => invariants::missing_sentinel(),
        }
    }

    /// Tokens before the terminator.
    pub fn tokens(self) -> &'a [Token] {
        &self.tokens[..self.len()]
    }

    /// Tokens including the terminator.
    pub fn with_terminator(self) -> &'a [Token] {
        &self.tokens[..=self.len()]
    }

    /// The embedded payload that follows the leading tag.
    pub(crate) fn payload(self) -> &'a [Token] {
        &self.tokens[1..=PAYLOAD_LEN]
    }

    /// View starting `n` tokens further in.
    pub(crate) fn skip(self, n: usize) -> TypeStr<'a> {
        TypeStr::new(&self.tokens[n..])
    }

    /// Copy into a fresh owned buffer (terminator included).
    pub fn to_type_string(self) -> TypeString {
        TypeString {
            tokens: self.with_terminator().into(),
        }
    }

    /// Copy onto the heap, allocating exactly `len() + 1` tokens.
    pub fn duplicate(self) -> TypeString {
        let mut dup = TypeString::allocate(self.len() + 1);
        dup.copy_from(self);
        dup
    }
}

impl PartialEq for TypeStr<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.with_terminator() == other.with_terminator()
    }
}

impl Eq for TypeStr<'_> {}

impl std::hash::Hash for TypeStr<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.with_terminator().hash(state);
    }
}

impl std::fmt::Debug for TypeStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeStr[{}]", self.render_raw())
    }
}

/// Owned, fixed-capacity type string buffer.
///
/// The buffer never grows: `copy_from` and `concat` panic when the result
/// would not fit. Size buffers with `allocate` or use the constructors,
/// which allocate exactly what they need. Dropping the buffer releases it.
#[derive(Clone)]
pub struct TypeString {
    tokens: Box<[Token]>,
}

impl TypeString {
    /// Allocate `capacity` tokens, all terminators (an empty type string).
    ///
    /// `capacity` must include room for the terminator.
    pub fn allocate(capacity: usize) -> Self {
        if capacity == 0 {
            invariants::capacity_exceeded(1, 0);
        }
        Self {
            tokens: vec![Token::END; capacity].into_boxed_slice(),
        }
    }

    /// Build `prefix ++ tail` into a buffer of exactly the right size.
    pub(crate) fn from_parts(prefix: &[Token], tail: TypeStr<'_>) -> Self {
        let tail = tail.with_terminator();
        let mut tokens = Vec::with_capacity(prefix.len() + tail.len());
        tokens.extend_from_slice(prefix);
        tokens.extend_from_slice(tail);
        Self {
            tokens: tokens.into_boxed_slice(),
        }
    }

    pub fn as_type_str(&self) -> TypeStr<'_> {
        TypeStr::new(&self.tokens)
    }

    /// Number of tokens before the terminator.
    pub fn len(&self) -> usize {
        self.as_type_str().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_type_str().is_empty()
    }

    /// Total tokens the buffer holds, terminator slots included.
    pub fn capacity(&self) -> usize {
        self.tokens.len()
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Overwrite the buffer with `src`, terminator included.
    pub fn copy_from(&mut self, src: TypeStr<'_>) {
        self.write_at(0, src);
    }

    /// Append `src` at the current terminator.
    pub fn concat(&mut self, src: TypeStr<'_>) {
        let at = self.len();
        self.write_at(at, src);
    }

    #[track_caller]
    fn write_at(&mut self, at: usize, src: TypeStr<'_>) {
        let src = src.with_terminator();
        let end = at + src.len();
        if end > self.tokens.len() {
            invariants::capacity_exceeded(end, self.tokens.len());
        }
        self.tokens[at..end].copy_from_slice(src);
    }
}

impl<'a> From<&'a TypeString> for TypeStr<'a> {
    fn from(value: &'a TypeString) -> Self {
        value.as_type_str()
    }
}

impl PartialEq for TypeString {
    fn eq(&self, other: &Self) -> bool {
        self.as_type_str() == other.as_type_str()
    }
}

impl Eq for TypeString {}

impl PartialEq<TypeStr<'_>> for TypeString {
    fn eq(&self, other: &TypeStr<'_>) -> bool {
        self.as_type_str() == *other
    }
}

impl std::fmt::Debug for TypeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeString[{}]", self.as_type_str().render_raw())
    }
}
