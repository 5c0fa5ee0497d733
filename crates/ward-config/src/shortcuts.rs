//! Shortcut table queries used by validation and listing.

use crate::schema::{ShortcutContext, ShortcutDef, ShortcutTable};
use std::collections::HashMap;
use ward_common::keymap::{parse_key_pattern, KeyPattern};

/// Returns every definition tagged with its context, contexts in the given order.
pub fn shortcuts_for_contexts<'a>(
    table: &'a ShortcutTable,
    contexts: &[ShortcutContext],
) -> Vec<(ShortcutContext, &'a ShortcutDef)> {
    contexts
        .iter()
        .flat_map(|ctx| table.for_context(*ctx).iter().map(move |def| (*ctx, def)))
        .collect()
}

/// Returns every definition in the table.
pub fn all_shortcuts(table: &ShortcutTable) -> Vec<(ShortcutContext, &ShortcutDef)> {
    shortcuts_for_contexts(table, &ShortcutContext::ALL)
}

/// Canonical form of a key string, so `"Ctrl+K"` and `"control+k"` compare equal.
fn canonical_key(key: &str) -> Option<String> {
    match parse_key_pattern(key).ok()? {
        KeyPattern::Single(mut kb) => {
            kb.modifiers.sort();
            let mut parts: Vec<String> = kb
                .modifiers
                .iter()
                .map(|m| format!("{m:?}").to_lowercase())
                .collect();
            parts.push(kb.key);
            Some(parts.join("+"))
        }
        KeyPattern::Sequence { prefix, suffix } => Some(format!("{prefix} {suffix}")),
    }
}

/// Find definitions in the same context that bind the same key for the same
/// sub-context. The later one wins at dispatch time, so these are reported as
/// warnings rather than errors.
pub fn find_duplicates(table: &ShortcutTable) -> Vec<String> {
    let mut warnings = Vec::new();

    for ctx in ShortcutContext::ALL {
        let mut seen: HashMap<(String, Option<&str>), &str> = HashMap::new();
        for def in table.for_context(ctx) {
            let Some(key) = canonical_key(&def.key) else {
                continue;
            };
            let slot = (key, def.sub_context.as_deref());
            if let Some(existing) = seen.insert(slot, &def.action) {
                warnings.push(format!(
                    "duplicate shortcut '{}' in {}: '{}' is shadowed by '{}'",
                    def.key,
                    ctx.label(),
                    existing,
                    def.action
                ));
            }
        }
    }

    warnings
}
