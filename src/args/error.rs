//! Parse errors.

use thiserror::Error;

/// A bare value token appeared before any key was opened to receive it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value '{value}' at position {position} has no preceding key")]
pub struct OrphanValueError {
    /// The offending token.
    pub value: String,
    /// Zero-based index of the token in the input.
    pub position: usize,
}
