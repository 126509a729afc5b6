//! Target description for the 6502 family.
//!
//! Replaces the compiler-wide `--signed-chars` switch and the `SIZEOF_*`
//! constants with one value owned by the compilation session.

use serde::Deserialize;

/// Error while loading a target description.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("invalid target description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage size, in bytes, of each scalar kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypeSizes {
    pub char: u32,
    pub short: u32,
    pub int: u32,
    pub long: u32,
    pub long_long: u32,
    pub ptr: u32,
    pub float: u32,
    pub double: u32,
}

impl Default for TypeSizes {
    fn default() -> Self {
        Self {
            char: 1,
            short: 2,
            int: 2,
            long: 4,
            long_long: 8,
            ptr: 2,
            float: 4,
            double: 4,
        }
    }
}

/// Per-session target configuration.
///
/// Missing keys in a JSON description keep their defaults:
///
/// ```
/// use c65_core::Target;
/// let target = Target::from_json(r#"{ "signed_chars": true }"#).unwrap();
/// assert!(target.signed_chars);
/// assert_eq!(target.sizes.ptr, 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Target {
    /// Plain `char` is `signed char` instead of `unsigned char`.
    pub signed_chars: bool,
    pub sizes: TypeSizes,
}

impl Target {
    /// Parse a target description from JSON.
    pub fn from_json(json: &str) -> Result<Self, TargetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_signed_chars(mut self, signed_chars: bool) -> Self {
        self.signed_chars = signed_chars;
        self
    }

    /// Smallest nonzero object size, substituted when a size is unknown.
    pub fn smallest_size(&self) -> u32 {
        self.sizes.char
    }
}
