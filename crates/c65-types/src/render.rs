//! Human-readable rendering of type strings.
//!
//! The spelling is what diagnostics show and what tools that parse compiler
//! output match against:
//!
//! - `const volatile unsigned char`, `struct point`, `union cell`
//! - `signed` is left off plain `int` and `long` only: `signed short`
//! - pointers: `int *`, `int **`, `char *const`
//! - arrays in declaration order: `int [2][3]`, `char []`
//! - functions: `function returning int`
//! - tags with no base kind: `unknown type: 001F`

use std::fmt::{self, Write as _};

use crate::symtab::{FuncFlags, SymbolTable};
use crate::token::{BaseKind, Qualifiers, Token};
use crate::type_str::TypeStr;

/// `Display` adapter returned by [`TypeStr::display`].
pub struct TypeDisplay<'a, 's> {
    ty: TypeStr<'a>,
    symbols: &'s dyn SymbolTable,
}

impl fmt::Display for TypeDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_type(&mut out, self.ty, self.symbols);
        f.write_str(&out)
    }
}

impl<'a> TypeStr<'a> {
    pub fn display<'s>(self, symbols: &'s dyn SymbolTable) -> TypeDisplay<'a, 's> {
        TypeDisplay { ty: self, symbols }
    }

    pub fn render(self, symbols: &dyn SymbolTable) -> String {
        self.display(symbols).to_string()
    }

    pub fn render_into(self, w: &mut impl fmt::Write, symbols: &dyn SymbolTable) -> fmt::Result {
        write!(w, "{}", self.display(symbols))
    }

    /// Tokens as four-digit hex, for debugging: `006C 8003 8000 0223`.
    pub fn render_raw(self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{token:04X}");
        }
        out
    }
}

fn write_type(out: &mut String, ty: TypeStr<'_>, symbols: &dyn SymbolTable) {
    let head = ty.head();
    let Some(kind) = head.kind() else {
        if !head.is_end() {
            push_word(out, &format!("unknown type: {head:04X}"));
        }
        return;
    };

    match kind {
        BaseKind::Ptr => {
            write_type(out, ty.indirect(), symbols);
            if !out.ends_with('*') && !out.is_empty() {
                out.push(' ');
            }
            out.push('*');
            let mut first = true;
            for name in qualifier_words(head.qualifiers()) {
                if !first {
                    out.push(' ');
                }
                out.push_str(name);
                first = false;
            }
        }
        BaseKind::Array => {
            let mut dims = Vec::new();
            let mut element = ty;
            while element.is_array() {
                dims.push(element.element_count());
                element = element.element_type();
            }
            write_type(out, element, symbols);
            if !out.is_empty() {
                out.push(' ');
            }
            for count in dims {
                if count < 0 {
                    out.push_str("[]");
                } else {
                    let _ = write!(out, "[{count}]");
                }
            }
        }
        BaseKind::Func => {
            push_word(out, "function returning");
            write_type(out, ty.function_return_type(), symbols);
        }
        BaseKind::Struct | BaseKind::Union => {
            write_qualifiers(out, head);
            let keyword = if kind == BaseKind::Struct {
                "struct"
            } else {
                "union"
            };
            let entry = symbols.aggregate(ty.aggregate_ref());
            push_word(out, &format!("{keyword} {}", entry.name));
        }
        scalar => {
            write_qualifiers(out, head);
            if head.is_unsigned() {
                push_word(out, "unsigned");
            } else if head.is_signed() && !matches!(scalar, BaseKind::Int | BaseKind::Long) {
                push_word(out, "signed");
            }
            if let Some(keyword) = scalar.keyword() {
                push_word(out, keyword);
            }
        }
    }
}

fn write_qualifiers(out: &mut String, head: Token) {
    for name in qualifier_words(head.qualifiers()) {
        push_word(out, name);
    }
}

fn qualifier_words(qualifiers: Qualifiers) -> impl Iterator<Item = &'static str> {
    [(Qualifiers::CONST, "const"), (Qualifiers::VOLATILE, "volatile")]
        .into_iter()
        .filter(move |(flag, _)| qualifiers.contains(*flag))
        .map(|(_, name)| name)
}

fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
    out.push_str(word);
}

/// Render a function declaration: `int __fastcall__ f (register char *, int)`.
///
/// `ty` is a function or pointer-to-function type.
pub fn render_signature(name: &str, ty: TypeStr<'_>, symbols: &dyn SymbolTable) -> String {
    let mut out = String::new();
    let _ = write_signature(&mut out, name, ty, symbols);
    out
}

pub fn write_signature(
    w: &mut impl fmt::Write,
    name: &str,
    ty: TypeStr<'_>,
    symbols: &dyn SymbolTable,
) -> fmt::Result {
    let desc = ty.func_desc(symbols);
    ty.function_return_type().render_into(w, symbols)?;
    for (flag, annotation) in [
        (FuncFlags::NEAR, "__near__"),
        (FuncFlags::FAR, "__far__"),
        (FuncFlags::FASTCALL, "__fastcall__"),
    ] {
        if desc.flags.contains(flag) {
            write!(w, " {annotation}")?;
        }
    }
    write!(w, " {name} (")?;
    if desc.flags.contains(FuncFlags::VOID_PARAM) {
        w.write_str("void")?;
    } else {
        for (i, param) in desc.params.iter().enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            if param.register {
                w.write_str("register ")?;
            }
            param.ty.as_type_str().render_into(w, symbols)?;
        }
    }
    w.write_str(")")
}
