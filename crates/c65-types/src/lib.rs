#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Encoded C types for the c65 compiler.
//!
//! A C type is a run of 16-bit tokens closed by a sentinel: a tag per
//! level (qualifiers, class, base kind), then a fixed two-token payload for
//! arrays, functions, structs and unions, then the nested type. Sub-types are
//! suffixes of the same buffer, so they are borrowed, never copied.
//!
//! This crate contains:
//! - Tokens and the payload codec
//! - Type-string buffers (`TypeString`) and views (`TypeStr`)
//! - Constructors, predicates and accessors
//! - Size and code generator class resolution
//! - Rendering for diagnostics
//! - The symbol table boundary (`SymbolTable`, `SymTab`)

pub mod codec;
pub mod construct;
mod error;
mod invariants;
pub mod layout;
mod query;
pub mod render;
pub mod symtab;
pub mod token;
mod type_str;

#[cfg(test)]
mod construct_tests;
#[cfg(test)]
mod scenarios_tests;
#[cfg(test)]
mod type_str_tests;

pub use codec::{PAYLOAD_LEN, PAYLOAD_MAX, copy_payload, decode, encode, encode_into};
pub use construct::{
    TYPE_INT, TYPE_LONG, TYPE_SIZE_T, TYPE_UCHAR, TYPE_UINT, TYPE_ULONG, TYPE_VOID,
    UNSPECIFIED_COUNT, array_of, char_array_type, default_char, function_type,
    implicit_function_type, pointer_to, qualified, struct_type, union_type,
};
pub use error::TypeError;
pub use layout::{CodegenClass, CodegenFlags, CodegenWidth, TypeEnv, sign_extend_char};
pub use query::TypeData;
pub use render::{TypeDisplay, render_signature, write_signature};
pub use symtab::{
    AggregateDesc, FuncDesc, FuncFlags, FuncId, MemberDesc, ParamDesc, SymId, SymTab, SymbolTable,
};
pub use token::{BaseKind, Qualifiers, Token, TypeClass};
pub use type_str::{TypeStr, TypeString};
