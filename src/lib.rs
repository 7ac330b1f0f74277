//! Prefix Index WASM Module
//!
//! Core logic for an editor extension working with lines that start with a
//! `number;number;number;` prefix:
//!
//! - `prefix`: cursor column relative to the end of the prefix, one-based
//! - `substitution`: digit-to-letter table for replacement mode
//! - `session`: replacement mode toggle and re-entrancy guard
//! - `api`: the JavaScript-facing exports

pub mod api;
pub mod error;
pub mod prefix;
pub mod session;
pub mod substitution;
pub mod text;

pub use error::IndexError;
pub use prefix::{find_prefix, resolve, Prefix};
pub use session::{ContentChange, Replacement, ReplacementMode, ReplacementSession, SessionOptions};
pub use substitution::{substitute, substitute_char};
pub use text::{TextPos, TextRange};

use wasm_bindgen::prelude::*;

// Runs when the host instantiates the module.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Prefix index WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        api::helpers::log_warn("logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
