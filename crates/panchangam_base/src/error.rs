//! Error types for name lookup.

use thiserror::Error;

/// A name did not match any entry of a lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}'")]
pub struct NameError {
    /// Table that was searched, e.g. `"masa"`.
    pub kind: &'static str,
    /// The rejected input.
    pub name: String,
}

impl NameError {
    pub fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}
