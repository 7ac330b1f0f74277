//! Digit substitution for a single inserted character

use wasm_bindgen::prelude::*;

use super::helpers::index_error;
use crate::substitution;

/// Replacement letter for a single inserted character
///
/// Returns `undefined` when the character has no mapping. Throws when `text`
/// is not exactly one character.
#[wasm_bindgen(js_name = substituteCharacter)]
pub fn substitute_character(text: &str) -> Result<Option<String>, JsValue> {
    let letter =
        substitution::substitute(text).map_err(|e| index_error("substituteCharacter", e))?;
    Ok(letter.map(String::from))
}
