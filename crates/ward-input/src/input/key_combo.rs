use ward_common::keymap::{KeyBind, Modifier};
use ward_common::KeyEvent;

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_META: u8 = 0b1000;

/// US-layout symbols produced by shift + digit.
const SHIFTED_DIGITS: [(&str, &str); 10] = [
    ("1", "!"),
    ("2", "@"),
    ("3", "#"),
    ("4", "$"),
    ("5", "%"),
    ("6", "^"),
    ("7", "&"),
    ("8", "*"),
    ("9", "("),
    ("0", ")"),
];

/// Digit whose shifted form is `symbol`.
pub fn unshifted_symbol(symbol: &str) -> Option<&'static str> {
    SHIFTED_DIGITS
        .iter()
        .find(|(_, s)| *s == symbol)
        .map(|(digit, _)| *digit)
}

/// A canonical key representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask, so equality compares all four
/// modifier flags: an event holding an extra modifier is a different combo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Meta=8.
    pub mods: u8,
    /// Normalized lower-case key name (e.g. "k", "enter", "1").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u8;
        for m in &kb.modifiers {
            mods |= match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Meta => MOD_META,
            };
        }
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from a key event's modifier flags and normalized key.
    pub fn from_event(event: &KeyEvent) -> Self {
        let m = event.modifiers;
        let mut mods = 0u8;
        if m.ctrl {
            mods |= MOD_CTRL;
        }
        if m.alt {
            mods |= MOD_ALT;
        }
        if m.shift {
            mods |= MOD_SHIFT;
        }
        if m.meta {
            mods |= MOD_META;
        }
        Self {
            mods,
            key: event.normalized_key(),
        }
    }

    pub fn has_shift(&self) -> bool {
        self.mods & MOD_SHIFT != 0
    }

    /// Reconstruct a [`KeyBind`] for display purposes.
    pub fn to_keybind(&self) -> KeyBind {
        let mut modifiers = Vec::new();
        if self.mods & MOD_CTRL != 0 {
            modifiers.push(Modifier::Ctrl);
        }
        if self.mods & MOD_ALT != 0 {
            modifiers.push(Modifier::Alt);
        }
        if self.mods & MOD_SHIFT != 0 {
            modifiers.push(Modifier::Shift);
        }
        if self.mods & MOD_META != 0 {
            modifiers.push(Modifier::Meta);
        }
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}
