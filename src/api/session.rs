//! Replacement session exposed to the host as a JS class
//!
//! Host usage from a document-change callback:
//!
//! ```js
//! const session = new ReplacementSession({ replacementMode: false });
//! onDidChangeTextDocument(event => {
//!     for (const r of session.planReplacements(event.contentChanges)) {
//!         editor.edit(b => b.replace(toRange(r.range), r.text))
//!             .then(() => session.editApplied());
//!     }
//! });
//! ```

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, serialize};
use crate::session::{ContentChange, ReplacementSession, SessionOptions};
use crate::{wasm_info, wasm_log, wasm_warn};

#[wasm_bindgen(js_name = ReplacementSession)]
pub struct JsReplacementSession {
    inner: ReplacementSession,
}

#[wasm_bindgen(js_class = ReplacementSession)]
impl JsReplacementSession {
    /// Create a session; `options` may be omitted
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsReplacementSession, JsValue> {
        let options: SessionOptions = if options.is_undefined() || options.is_null() {
            SessionOptions::default()
        } else {
            deserialize(options, "Invalid session options")?
        };

        let inner = ReplacementSession::new(&options);
        wasm_info!("Replacement session created, mode {}", inner.mode());
        Ok(JsReplacementSession { inner })
    }

    /// Flip replacement mode; returns whether it is now active
    pub fn toggle(&mut self) -> bool {
        self.inner.toggle().is_on()
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// `"ON"` or `"OFF"`
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.mode().to_string()
    }

    #[wasm_bindgen(getter, js_name = isApplyingEdit)]
    pub fn is_applying_edit(&self) -> bool {
        self.inner.is_applying_edit()
    }

    /// Plan replacements for a batch of content changes
    ///
    /// # Parameters
    /// - `changes_js`: array of `{ range: { start, end }, text }` objects
    ///
    /// # Returns
    /// Array of `{ range: { start, end }, text }` edits for the host to apply.
    /// Report each one with `editApplied()` once the host edit completes.
    #[wasm_bindgen(js_name = planReplacements)]
    pub fn plan_replacements(&mut self, changes_js: JsValue) -> Result<js_sys::Array, JsValue> {
        let changes: Vec<ContentChange> = deserialize(changes_js, "Invalid content changes")?;
        let replacements = self.inner.plan_replacements(&changes);
        wasm_log!(
            "planReplacements: {} change(s) -> {} replacement(s)",
            changes.len(),
            replacements.len()
        );

        let result = js_sys::Array::new();
        for replacement in &replacements {
            result.push(&serialize(replacement, "Failed to serialize replacement")?);
        }
        Ok(result)
    }

    /// Report that one planned replacement has been applied
    #[wasm_bindgen(js_name = editApplied)]
    pub fn edit_applied(&mut self) {
        if !self.inner.is_applying_edit() {
            wasm_warn!("editApplied called with no pending edits");
        }
        self.inner.edit_applied();
    }
}
