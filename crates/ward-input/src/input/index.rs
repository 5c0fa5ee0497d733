use std::collections::{BTreeMap, HashMap};

use ward_common::KeyEvent;
use ward_config::schema::ShortcutContext;
use ward_config::Conditions;

use super::key_combo::{unshifted_symbol, KeyCombo};
use super::shortcut::{Shortcut, ShortcutKey, ShortcutSet};

/// The active shortcuts for one set of conditions, split by how they are
/// triggered.
///
/// Rebuilt whenever the shortcuts, conditions, or sub-context change. When
/// two active shortcuts claim the same slot, the later one wins; both stay
/// in the active list.
#[derive(Debug, Clone, Default)]
pub struct ShortcutIndex {
    active: Vec<Shortcut>,
    direct: HashMap<String, usize>,
    modified: HashMap<KeyCombo, usize>,
    prefix_groups: HashMap<String, HashMap<String, usize>>,
}

impl ShortcutIndex {
    /// Classify `set` against `conditions` and the caller's sub-context.
    ///
    /// A shortcut is active when its `when` condition holds and its
    /// sub-context (if any) equals `sub_context`. Conditions that fail to
    /// evaluate are logged and count as false.
    pub fn build(set: &ShortcutSet, conditions: &Conditions, sub_context: Option<&str>) -> Self {
        let mut index = Self::default();

        for shortcut in set.iter() {
            match shortcut.when.eval(conditions) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    tracing::warn!(
                        action = %shortcut.action,
                        "disabling shortcut, condition '{}' failed: {e}",
                        shortcut.when
                    );
                    continue;
                }
            }

            if let Some(required) = shortcut.sub_context.as_deref() {
                if sub_context != Some(required) {
                    continue;
                }
            }

            let slot = index.active.len();
            match &shortcut.key {
                ShortcutKey::Direct(key) => {
                    index.direct.insert(key.clone(), slot);
                }
                ShortcutKey::Modified(combo) => {
                    index.modified.insert(combo.clone(), slot);
                }
                ShortcutKey::Prefix { prefix, suffix } => {
                    index
                        .prefix_groups
                        .entry(prefix.clone())
                        .or_default()
                        .insert(suffix.clone(), slot);
                }
            }
            index.active.push(shortcut.clone());
        }

        index
    }

    /// Active shortcuts in merge order.
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.active
    }

    /// Active shortcuts grouped by the context they were defined in.
    pub fn by_context(&self) -> BTreeMap<ShortcutContext, Vec<&Shortcut>> {
        let mut groups: BTreeMap<ShortcutContext, Vec<&Shortcut>> = BTreeMap::new();
        for shortcut in &self.active {
            groups.entry(shortcut.context).or_default().push(shortcut);
        }
        groups
    }

    /// Direct shortcut bound to a normalized key.
    pub fn direct(&self, key: &str) -> Option<&Shortcut> {
        self.direct.get(key).map(|&slot| &self.active[slot])
    }

    /// Modified shortcut matching an event's key and exact modifier state.
    pub fn modified(&self, event: &KeyEvent) -> Option<&Shortcut> {
        let combo = KeyCombo::from_event(event);
        if let Some(&slot) = self.modified.get(&combo) {
            return Some(&self.active[slot]);
        }

        // shift+1 is reported as "!" on US layouts
        if combo.has_shift() {
            let digit = unshifted_symbol(&combo.key)?;
            let unshifted = KeyCombo {
                mods: combo.mods,
                key: digit.to_string(),
            };
            return self.modified.get(&unshifted).map(|&slot| &self.active[slot]);
        }

        None
    }

    /// Whether `key` starts at least one active prefix sequence.
    pub fn is_prefix(&self, key: &str) -> bool {
        self.prefix_groups.contains_key(key)
    }

    /// Shortcut bound to `prefix` followed by `suffix`.
    pub fn prefixed(&self, prefix: &str, suffix: &str) -> Option<&Shortcut> {
        self.prefix_groups
            .get(prefix)?
            .get(suffix)
            .map(|&slot| &self.active[slot])
    }

    /// Number of active shortcuts.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no shortcut is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
