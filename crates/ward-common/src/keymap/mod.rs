//! Shortcut key strings: parsing, normalization, and display.
//!
//! Key strings come from the shortcut table (`"k"`, `"ctrl+k"`, `"g p"`)
//! and are normalized to lower case so they compare directly with
//! normalized key events.

mod display;
mod parse;
mod types;

pub use display::{keybind_to_display, pattern_to_display};
pub use parse::{normalize_key_name, parse_key_pattern, parse_keybind};
pub use types::{KeyBind, KeyPattern, Modifier};
