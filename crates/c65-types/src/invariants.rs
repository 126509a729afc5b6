//! Internal consistency failures excluded from coverage reports.
//!
//! Each of these means an earlier phase handed over a malformed type string
//! or a dangling descriptor reference. Compilation cannot continue.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::token::Token;

#[cold]
#[track_caller]
pub(crate) fn unexpected_type(op: &str, expected: &str, found: Token) -> ! {
    panic!("internal error: {op}: expected {expected} type, found token {found:04X}")
}

#[cold]
#[track_caller]
pub(crate) fn missing_sentinel() -> ! {
    panic!("internal error: type string has no terminator")
}

#[cold]
#[track_caller]
pub(crate) fn capacity_exceeded(needed: usize, capacity: usize) -> ! {
    panic!("internal error: type string needs {needed} tokens, buffer holds {capacity}")
}

#[cold]
#[track_caller]
pub(crate) fn dangling(what: &str, index: u32) -> ! {
    panic!("internal error: {what} #{index} not found in symbol table")
}
