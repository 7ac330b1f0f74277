//! JavaScript-facing API
//!
//! # Module Structure
//!
//! - `helpers`: console logging, host value conversion, error conversion
//! - `position`: prefix-relative index for the status indicator and hover
//! - `substitution`: digit-to-letter lookup for a single inserted character
//! - `session`: replacement mode state driven from document-change callbacks

pub mod helpers;
pub mod position;
pub mod session;
pub mod substitution;

pub use position::resolve_relative_index;
pub use session::JsReplacementSession;
pub use substitution::substitute_character;
