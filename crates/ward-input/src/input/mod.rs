//! Compiled shortcuts and the categorized shortcut index.
//!
//! Built from the config's [`ShortcutTable`](ward_config::ShortcutTable) at
//! startup and reclassified whenever the page's conditions change.

mod index;
mod key_combo;
mod shortcut;

pub use index::ShortcutIndex;
pub use key_combo::{unshifted_symbol, KeyCombo};
pub use shortcut::{Shortcut, ShortcutKey, ShortcutSet};
