//! Plain text positions shared by the resolver, the session and the JS API.

pub mod cursor;

pub use cursor::{utf16_len, TextPos, TextRange};
