use serde::{Deserialize, Serialize};

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Ctrl key on all platforms.
    Ctrl,
    /// Alt key (Option on macOS).
    Alt,
    /// Shift key.
    Shift,
    /// Meta key: Cmd on macOS, Win on Windows, Super on Linux.
    Meta,
}

/// A key binding consisting of zero or more modifiers and a key name.
///
/// The key name is canonical lower case (`"k"`, `"enter"`, `"/"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl KeyBind {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            key: key.into(),
        }
    }
}

/// A parsed shortcut key string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPattern {
    /// One keystroke, with or without modifiers.
    Single(KeyBind),
    /// Two plain keystrokes: a prefix followed by a suffix (`"g p"`).
    Sequence { prefix: String, suffix: String },
}
