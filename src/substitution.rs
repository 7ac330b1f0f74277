//! Digit-to-letter substitution for replacement mode
//!
//! While replacement mode is on, a digit typed on its own is rewritten to a
//! letter. `9` has no letter and is left as typed.

use crate::error::IndexError;

/// Digit → letter table
pub const SUBSTITUTIONS: [(char, char); 9] = [
    ('0', 'X'),
    ('1', 'A'),
    ('2', 'B'),
    ('3', 'C'),
    ('4', 'D'),
    ('5', 'E'),
    ('6', 'F'),
    ('7', 'G'),
    ('8', 'H'),
];

/// Look up the replacement letter for a single character
pub fn substitute_char(ch: char) -> Option<char> {
    SUBSTITUTIONS
        .iter()
        .find(|(digit, _)| *digit == ch)
        .map(|(_, letter)| *letter)
}

/// Look up the replacement letter for an inserted text of exactly one character
///
/// # Errors
/// `IndexError::InvalidInput` when `text` is empty or longer than one
/// character. Multi-character insertions are never substituted, so callers
/// should pass them through without calling this.
pub fn substitute(text: &str) -> Result<Option<char>, IndexError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(substitute_char(ch)),
        _ => Err(IndexError::InvalidInput {
            len: text.chars().count(),
        }),
    }
}
