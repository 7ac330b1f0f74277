//! Text positions as reported by the editor host
//!
//! Columns are UTF-16 code units, which is what JavaScript editor hosts
//! count in. The field names follow the host's `{ line, character }` shape so
//! positions deserialize straight from host objects.

use serde::{Deserialize, Serialize};

/// A position in a document (line, UTF-16 column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextPos {
    pub line: usize,
    pub character: usize,
}

impl TextPos {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Same line, `delta` columns to the right
    pub fn translate(&self, delta: usize) -> Self {
        Self {
            line: self.line,
            character: self.character + delta,
        }
    }
}

/// A range of text from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: TextPos,
    pub end: TextPos,
}

impl TextRange {
    pub fn new(start: TextPos, end: TextPos) -> Self {
        Self { start, end }
    }

    /// Range covering the single column starting at `pos`
    pub fn single_char(pos: TextPos) -> Self {
        Self {
            start: pos,
            end: pos.translate(1),
        }
    }
}

/// Length of `text` in UTF-16 code units
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}
