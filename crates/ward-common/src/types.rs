//! Key event types shared by the config, input, and app crates.

use serde::{Deserialize, Serialize};

use crate::keymap::normalize_key_name;

/// Modifier key state carried by a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Whether any modifier is held.
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.shift || self.meta
    }

    /// Ctrl or meta held: these let shortcuts fire from inside text fields.
    pub fn ctrl_or_meta(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// The element a key event was delivered to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTarget {
    /// Anything that is not an editable field.
    #[default]
    Page,
    /// A single-line `<input>`.
    TextInput,
    /// A multi-line `<textarea>`.
    TextArea,
}

impl EventTarget {
    pub fn is_editable(self) -> bool {
        matches!(self, EventTarget::TextInput | EventTarget::TextArea)
    }
}

/// A keydown event as reported by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Raw key value, e.g. `"g"`, `"!"`, `"Enter"`, `"Shift"`.
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub target: EventTarget,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
            target: EventTarget::Page,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    pub fn in_target(mut self, target: EventTarget) -> Self {
        self.target = target;
        self
    }

    /// Canonical lower-case key name, matching what the keymap parser produces.
    pub fn normalized_key(&self) -> String {
        if self.key == " " {
            return "space".into();
        }
        normalize_key_name(&self.key)
    }

    /// Keydown for a modifier on its own (e.g. pressing Shift before a letter).
    pub fn is_modifier_only(&self) -> bool {
        matches!(
            self.key.as_str(),
            "Shift" | "Control" | "Alt" | "AltGraph" | "Meta" | "OS" | "Super" | "Hyper"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_key_lowercases() {
        assert_eq!(KeyEvent::new("G").normalized_key(), "g");
        assert_eq!(KeyEvent::new("Enter").normalized_key(), "enter");
        assert_eq!(KeyEvent::new("!").normalized_key(), "!");
    }

    #[test]
    fn normalized_key_maps_browser_names() {
        assert_eq!(KeyEvent::new(" ").normalized_key(), "space");
        assert_eq!(KeyEvent::new("ArrowUp").normalized_key(), "up");
        assert_eq!(KeyEvent::new("Esc").normalized_key(), "escape");
    }

    #[test]
    fn modifier_only_events() {
        assert!(KeyEvent::new("Shift").with_shift().is_modifier_only());
        assert!(KeyEvent::new("Meta").is_modifier_only());
        assert!(!KeyEvent::new("s").is_modifier_only());
    }

    #[test]
    fn editable_targets() {
        assert!(!EventTarget::Page.is_editable());
        assert!(EventTarget::TextInput.is_editable());
        assert!(EventTarget::TextArea.is_editable());
    }

    #[test]
    fn modifiers_helpers() {
        assert!(!Modifiers::NONE.any());
        let m = Modifiers {
            meta: true,
            ..Default::default()
        };
        assert!(m.any());
        assert!(m.ctrl_or_meta());

        let shift_only = Modifiers {
            shift: true,
            ..Default::default()
        };
        assert!(!shift_only.ctrl_or_meta());
    }

    #[test]
    fn key_event_deserializes_with_defaults() {
        let event: KeyEvent = serde_json::from_str(r#"{"key":"k"}"#).unwrap();
        assert_eq!(event.key, "k");
        assert_eq!(event.modifiers, Modifiers::NONE);
        assert_eq!(event.target, EventTarget::Page);
    }
}
