use ward_common::keymap::{
    keybind_to_display, parse_key_pattern, pattern_to_display, KeyBind, KeyPattern,
};
use ward_common::WardError;
use ward_config::schema::{ShortcutContext, ShortcutDef, ShortcutTable};
use ward_config::shortcuts::shortcuts_for_contexts;
use ward_config::Condition;

use super::key_combo::KeyCombo;

/// How a shortcut is triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutKey {
    /// A single unmodified key.
    Direct(String),
    /// One or more held modifiers plus a key.
    Modified(KeyCombo),
    /// A prefix key followed by a suffix key.
    Prefix { prefix: String, suffix: String },
}

impl ShortcutKey {
    pub fn parse(s: &str) -> Result<Self, WardError> {
        let key = match parse_key_pattern(s)? {
            KeyPattern::Single(kb) if kb.modifiers.is_empty() => ShortcutKey::Direct(kb.key),
            KeyPattern::Single(kb) => ShortcutKey::Modified(KeyCombo::from_keybind(&kb)),
            KeyPattern::Sequence { prefix, suffix } => ShortcutKey::Prefix { prefix, suffix },
        };
        Ok(key)
    }

    /// Platform display string for help output.
    pub fn display(&self) -> String {
        match self {
            ShortcutKey::Direct(key) => keybind_to_display(&KeyBind::plain(key.clone())),
            ShortcutKey::Modified(combo) => keybind_to_display(&combo.to_keybind()),
            ShortcutKey::Prefix { prefix, suffix } => pattern_to_display(&KeyPattern::Sequence {
                prefix: prefix.clone(),
                suffix: suffix.clone(),
            }),
        }
    }
}

/// A shortcut definition with its key and condition parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub context: ShortcutContext,
    pub key: ShortcutKey,
    pub action: String,
    pub description: String,
    pub when: Condition,
    pub sub_context: Option<String>,
}

impl Shortcut {
    pub fn compile(context: ShortcutContext, def: &ShortcutDef) -> Result<Self, WardError> {
        Ok(Self {
            context,
            key: ShortcutKey::parse(&def.key)?,
            action: def.action.clone(),
            description: def.description.clone(),
            when: Condition::parse(&def.when)?,
            sub_context: def.sub_context.clone(),
        })
    }
}

/// The compiled shortcuts for a set of contexts, in merge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutSet {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutSet {
    /// Compile the definitions for `contexts`, in the given order.
    ///
    /// Definitions that fail to compile are logged as warnings and skipped;
    /// the loader has already reported them as validation errors.
    pub fn from_table(table: &ShortcutTable, contexts: &[ShortcutContext]) -> Self {
        let mut shortcuts = Vec::new();

        for (context, def) in shortcuts_for_contexts(table, contexts) {
            match Shortcut::compile(context, def) {
                Ok(shortcut) => shortcuts.push(shortcut),
                Err(e) => {
                    tracing::warn!(
                        context = context.label(),
                        action = %def.action,
                        "skipping shortcut '{}': {e}",
                        def.key
                    );
                }
            }
        }

        Self { shortcuts }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shortcut> {
        self.shortcuts.iter()
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}
