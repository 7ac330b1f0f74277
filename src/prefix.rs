//! Prefix-relative column resolution
//!
//! Lines may start with a machine-readable `number;number;number;` prefix
//! (e.g. `12;3;45;hello`). The text after it is the payload, and the cursor
//! position is reported relative to the start of the payload, one-based.
//!
//! The prefix is pure ASCII, so its length is the same whether columns are
//! counted in bytes, chars or UTF-16 code units. Only the bounds check on the
//! incoming offset needs the host's unit (UTF-16).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::IndexError;
use crate::text::utf16_len;

lazy_static! {
    // ASCII digits only: `\d` in the regex crate also matches other Unicode digits
    static ref PREFIX_PATTERN: Regex =
        Regex::new(r"^([0-9]+);([0-9]+);([0-9]+);").expect("prefix pattern is valid");
}

/// The `number;number;number;` prefix at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix<'a> {
    text: &'a str,
    fields: [&'a str; 3],
}

impl<'a> Prefix<'a> {
    /// The matched text, trailing `;` included
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in columns, trailing `;` included
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// The three digit runs, kept as text since they can exceed any integer width
    pub fn fields(&self) -> [&'a str; 3] {
        self.fields
    }
}

/// Match the prefix at the start of `line`, if there is one
pub fn find_prefix(line: &str) -> Option<Prefix<'_>> {
    let caps = PREFIX_PATTERN.captures(line)?;
    let whole = caps.get(0)?;
    Some(Prefix {
        text: whole.as_str(),
        fields: [
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
        ],
    })
}

/// Resolve the one-based payload index for a cursor at `offset` in `line`
///
/// `offset` is a zero-based UTF-16 column and may equal the line length
/// (cursor at end of line).
///
/// Returns `Ok(None)` when the line has no prefix or the cursor sits inside
/// the prefix itself.
///
/// # Errors
/// `IndexError::OutOfRange` when `offset` is past the end of the line.
pub fn resolve(line: &str, offset: usize) -> Result<Option<usize>, IndexError> {
    let len = utf16_len(line);
    if offset > len {
        return Err(IndexError::OutOfRange { offset, len });
    }

    let Some(prefix) = find_prefix(line) else {
        return Ok(None);
    };

    if offset < prefix.len() {
        return Ok(None);
    }

    Ok(Some(offset - prefix.len() + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_prefix_fields() {
        let prefix = find_prefix("12;3;45;hello").unwrap();
        assert_eq!(prefix.as_str(), "12;3;45;");
        assert_eq!(prefix.len(), 8);
        assert_eq!(prefix.fields(), ["12", "3", "45"]);
    }

    #[test]
    fn test_find_prefix_requires_digits_in_every_run() {
        assert!(find_prefix(";;;").is_none());
        assert!(find_prefix("1;;3;x").is_none());
        assert!(find_prefix("1;2;3").is_none()); // missing terminator
        assert!(find_prefix(" 1;2;3;").is_none()); // anchored at line start
        assert!(find_prefix("a1;2;3;").is_none());
    }

    #[test]
    fn test_find_prefix_rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert!(find_prefix("١;٢;٣;payload").is_none());
    }

    #[test]
    fn test_extra_semicolons_are_payload() {
        let prefix = find_prefix("1;2;3;4;5;").unwrap();
        assert_eq!(prefix.as_str(), "1;2;3;");
        assert_eq!(resolve("1;2;3;4;5;", 6), Ok(Some(1)));
        assert_eq!(resolve("1;2;3;4;5;", 10), Ok(Some(5)));
    }

    #[test]
    fn test_resolve_boundaries() {
        let line = "12;3;45;hello";
        assert_eq!(resolve(line, 7), Ok(None));
        assert_eq!(resolve(line, 8), Ok(Some(1)));
        assert_eq!(resolve(line, 12), Ok(Some(5)));
        assert_eq!(resolve(line, 13), Ok(Some(6))); // end of line
    }

    #[test]
    fn test_resolve_inside_prefix_is_none() {
        let line = "12;3;45;hello";
        for offset in 0..8 {
            assert_eq!(resolve(line, offset), Ok(None), "offset {}", offset);
        }
    }

    #[test]
    fn test_resolve_prefix_only_line() {
        assert_eq!(resolve("1;2;3;", 6), Ok(Some(1)));
        assert_eq!(resolve("1;2;3;", 5), Ok(None));
    }

    #[test]
    fn test_resolve_without_prefix_is_none() {
        for line in ["", ";;;", "hello world", "1;2;x;abc"] {
            for offset in 0..=line.len() {
                assert_eq!(resolve(line, offset), Ok(None), "{:?} at {}", line, offset);
            }
        }
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert_eq!(
            resolve("12;3;45;hello", 14),
            Err(IndexError::OutOfRange { offset: 14, len: 13 })
        );
        assert_eq!(
            resolve("", 1),
            Err(IndexError::OutOfRange { offset: 1, len: 0 })
        );
    }

    #[test]
    fn test_resolve_counts_utf16_columns() {
        // "é" is one UTF-16 unit, "🎵" is two
        let line = "1;2;3;é🎵";
        assert_eq!(resolve(line, 9), Ok(Some(4)));
        assert!(resolve(line, 10).is_err());
    }
}
