//! Validation for shortcut definitions: key syntax, condition syntax, and
//! required fields.

use crate::condition::Condition;
use crate::schema::{ShortcutContext, ShortcutDef, WardConfig};
use ward_common::keymap::parse_key_pattern;

/// Validate every definition in every context.
pub(crate) fn validate_shortcuts(errors: &mut Vec<String>, config: &WardConfig) {
    for ctx in ShortcutContext::ALL {
        for (i, def) in config.shortcuts.for_context(ctx).iter().enumerate() {
            validate_def(errors, &format!("shortcuts.{}[{i}]", ctx.label()), def);
        }
    }
}

fn validate_def(errors: &mut Vec<String>, path: &str, def: &ShortcutDef) {
    if let Err(e) = parse_key_pattern(&def.key) {
        errors.push(format!("{path}.key '{}': {e}", def.key));
    }

    if def.action.trim().is_empty() {
        errors.push(format!("{path}.action must not be empty"));
    }

    if let Err(e) = Condition::parse(&def.when) {
        errors.push(format!("{path}.when '{}': {e}", def.when));
    }

    if let Some(sub) = &def.sub_context {
        if sub.trim().is_empty() {
            errors.push(format!("{path}.sub_context must not be empty"));
        }
    }
}
