//! Object sizes and code generator classes.

use bitflags::bitflags;
use c65_core::{Diagnostics, Target};

use crate::error::TypeError;
use crate::invariants;
use crate::symtab::SymbolTable;
use crate::token::Token;
use crate::type_str::TypeStr;

/// What size and class resolution read: the target and the symbol table.
#[derive(Clone, Copy)]
pub struct TypeEnv<'a> {
    pub target: &'a Target,
    pub symbols: &'a dyn SymbolTable,
}

impl<'a> TypeEnv<'a> {
    pub fn new(target: &'a Target, symbols: &'a dyn SymbolTable) -> Self {
        Self { target, symbols }
    }
}

/// Operand width the code generator works with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodegenWidth {
    Char,
    Int,
    Long,
    Float,
    /// Functions: only the call flags matter.
    None,
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CodegenFlags: u8 {
        const UNSIGNED = 0x01;
        /// Call with a fixed argument count (non-variadic function).
        const FIXED_ARGC = 0x02;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodegenClass {
    pub width: CodegenWidth,
    pub flags: CodegenFlags,
}

impl CodegenClass {
    /// Substituted for types the code generator cannot handle.
    pub const GENERIC_INT: Self = Self::new(CodegenWidth::Int, CodegenFlags::empty());

    /// Address-sized unsigned: pointers, arrays, structs and unions.
    pub const ADDRESS: Self = Self::new(CodegenWidth::Int, CodegenFlags::UNSIGNED);

    pub const fn new(width: CodegenWidth, flags: CodegenFlags) -> Self {
        Self { width, flags }
    }

    pub fn is_unsigned(self) -> bool {
        self.flags.contains(CodegenFlags::UNSIGNED)
    }
}

impl TypeStr<'_> {
    /// Storage size in bytes.
    ///
    /// Void and arrays of unspecified size are 0. Functions are sized as a
    /// pointer to them. An array size is computed in the target's wrapping
    /// arithmetic.
    #[track_caller]
    pub fn size_of(self, env: &TypeEnv<'_>) -> u32 {
        let sizes = &env.target.sizes;
        match self.head().unqualified() {
            Token::VOID => 0,
            Token::SCHAR | Token::UCHAR => sizes.char,
            Token::SHORT | Token::USHORT => sizes.short,
            Token::INT | Token::UINT | Token::ENUM => sizes.int,
            Token::LONG | Token::ULONG => sizes.long,
            Token::LONGLONG | Token::ULONGLONG => sizes.long_long,
            Token::FLOAT => sizes.float,
            Token::DOUBLE => sizes.double,
            Token::PTR | Token::FUNC => sizes.ptr,
            Token::STRUCT | Token::UNION => env.symbols.aggregate(self.aggregate_ref()).size,
            Token::ARRAY => match u32::try_from(self.element_count()) {
                Ok(count) => count.wrapping_mul(self.element_type().size_of(env)),
                Err(_) => 0,
            },
            other => invariants::unexpected_type("size_of", "sized", other),
        }
    }

    /// Size of the object a pointer or array refers to.
    #[track_caller]
    pub fn pointer_target_size_of(self, env: &TypeEnv<'_>) -> u32 {
        if !self.is_class_ptr() {
            invariants::unexpected_type("pointer_target_size_of", "pointer or array", self.head());
        }
        self.indirect().size_of(env)
    }

    /// `size_of`, with a zero size of a non-void type as an error.
    #[track_caller]
    pub fn try_checked_size_of(self, env: &TypeEnv<'_>) -> Result<u32, TypeError> {
        nonzero_size(self, self.size_of(env), env)
    }

    #[track_caller]
    pub fn try_checked_pointer_target_size_of(self, env: &TypeEnv<'_>) -> Result<u32, TypeError> {
        let size = self.pointer_target_size_of(env);
        nonzero_size(self.indirect(), size, env)
    }

    /// `size_of`, reporting an unknown size and substituting the target's
    /// smallest object size.
    #[track_caller]
    pub fn checked_size_of(self, env: &TypeEnv<'_>, diagnostics: &mut Diagnostics) -> u32 {
        self.try_checked_size_of(env)
            .unwrap_or_else(|err| substitute_size(err, env, diagnostics))
    }

    #[track_caller]
    pub fn checked_pointer_target_size_of(
        self,
        env: &TypeEnv<'_>,
        diagnostics: &mut Diagnostics,
    ) -> u32 {
        self.try_checked_pointer_target_size_of(env)
            .unwrap_or_else(|err| substitute_size(err, env, diagnostics))
    }

    /// How the code generator handles values of this type.
    #[track_caller]
    pub fn try_codegen_class(self, env: &TypeEnv<'_>) -> Result<CodegenClass, TypeError> {
        let unsigned = CodegenFlags::UNSIGNED;
        let class = match self.head().unqualified() {
            Token::SCHAR => CodegenClass::new(CodegenWidth::Char, CodegenFlags::empty()),
            Token::UCHAR => CodegenClass::new(CodegenWidth::Char, unsigned),
            Token::SHORT | Token::INT | Token::ENUM => CodegenClass::GENERIC_INT,
            Token::USHORT | Token::UINT => CodegenClass::new(CodegenWidth::Int, unsigned),
            Token::PTR | Token::ARRAY | Token::STRUCT | Token::UNION => CodegenClass::ADDRESS,
            Token::LONG => CodegenClass::new(CodegenWidth::Long, CodegenFlags::empty()),
            Token::ULONG => CodegenClass::new(CodegenWidth::Long, unsigned),
            Token::FLOAT | Token::DOUBLE => {
                CodegenClass::new(CodegenWidth::Float, CodegenFlags::empty())
            }
            Token::FUNC => {
                let flags = if self.is_variadic(env.symbols) {
                    CodegenFlags::empty()
                } else {
                    CodegenFlags::FIXED_ARGC
                };
                CodegenClass::new(CodegenWidth::None, flags)
            }
            _ => {
                return Err(TypeError::IllegalType {
                    ty: self.render(env.symbols),
                });
            }
        };
        Ok(class)
    }

    /// `try_codegen_class`, reporting an illegal type and substituting
    /// `CodegenClass::GENERIC_INT`.
    #[track_caller]
    pub fn codegen_class(self, env: &TypeEnv<'_>, diagnostics: &mut Diagnostics) -> CodegenClass {
        self.try_codegen_class(env).unwrap_or_else(|err| {
            err.report(diagnostics);
            tracing::debug!(%err, "substituting generic int class");
            CodegenClass::GENERIC_INT
        })
    }
}

fn nonzero_size(ty: TypeStr<'_>, size: u32, env: &TypeEnv<'_>) -> Result<u32, TypeError> {
    if size == 0 && ty.head().unqualified() != Token::VOID {
        return Err(TypeError::UnknownSize {
            ty: ty.render(env.symbols),
        });
    }
    Ok(size)
}

fn substitute_size(err: TypeError, env: &TypeEnv<'_>, diagnostics: &mut Diagnostics) -> u32 {
    err.report(diagnostics);
    let size = env.target.smallest_size();
    tracing::debug!(%err, size, "substituting object size");
    size
}

/// Widen a character constant the way the target reads a `char`.
///
/// With signed chars, a byte with the high bit set is negative; otherwise
/// the value is masked to an unsigned byte.
pub fn sign_extend_char(value: i32, target: &Target) -> i32 {
    if target.signed_chars && value & 0x80 != 0 {
        value | !0xFF
    } else {
        value & 0xFF
    }
}
