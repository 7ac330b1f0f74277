//! Prefix-relative position for the status indicator and hover
//!
//! The host calls this on every cursor move and hover with the current line
//! text and zero-based UTF-16 column. Nothing is cached between calls.

use wasm_bindgen::prelude::*;

use super::helpers::index_error;
use crate::prefix;

/// Resolve the one-based payload index for a cursor column
///
/// # Parameters
/// - `line`: full text of the cursor's line
/// - `offset`: zero-based column (UTF-16 code units), at most the line length
///
/// # Returns
/// The index, or `undefined` when the line has no `number;number;number;`
/// prefix or the cursor sits inside it. Throws when `offset` is past the end
/// of the line.
#[wasm_bindgen(js_name = resolveRelativeIndex)]
pub fn resolve_relative_index(line: &str, offset: usize) -> Result<Option<usize>, JsValue> {
    prefix::resolve(line, offset).map_err(|e| index_error("resolveRelativeIndex", e))
}
