#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Session-wide pieces shared by the c65 compiler crates.
//!
//! - **Target**: per-session configuration (type sizes, char signedness),
//!   read-only once compilation starts.
//! - **Diagnostics**: user-facing messages collected during a pass. Internal
//!   consistency failures are not diagnostics; they panic where detected.

pub mod diagnostics;
mod target;

#[cfg(test)]
mod target_tests;

pub use diagnostics::{
    DiagnosticBuilder, DiagnosticKind, DiagnosticMessage, Diagnostics, DiagnosticsPrinter,
    Severity,
};
pub use target::{Target, TargetError, TypeSizes};
