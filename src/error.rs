//! Error types for prefix resolution and digit substitution
//!
//! Both variants are contract violations by the caller. A line without a
//! prefix or a character without a mapping is not an error; those come back
//! as `Ok(None)`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Column lies past the end of the line
    #[error("Offset {offset} is out of range for a line of length {len}")]
    OutOfRange { offset: usize, len: usize },

    /// Substitution input was not exactly one character
    #[error("Expected exactly one character, got {len}")]
    InvalidInput { len: usize },
}
