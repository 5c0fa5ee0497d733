use ward_config::WardConfig;
use ward_input::{ShortcutIndex, ShortcutSet};

use crate::cli::Scope;

/// Classify the configured shortcuts for `scope`.
pub fn active_index(config: &WardConfig, scope: &Scope) -> ShortcutIndex {
    let set = ShortcutSet::from_table(&config.shortcuts, &scope.contexts());
    ShortcutIndex::build(&set, &scope.conditions(), scope.sub_context.as_deref())
}

/// Help-dialog style listing, grouped by context.
pub fn render(index: &ShortcutIndex) -> String {
    if index.is_empty() {
        return "no active shortcuts\n".into();
    }

    let mut out = String::new();
    for (context, shortcuts) in index.by_context() {
        out.push_str(context.label());
        out.push('\n');
        for shortcut in shortcuts {
            let line = format!(
                "  {:<16} {:<24} {}",
                shortcut.key.display(),
                shortcut.action,
                shortcut.description
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ward_config::{Conditions, ShortcutContext, ShortcutDef};

    fn scope(contexts: &[ShortcutContext], flags: &[(&str, bool)]) -> Scope {
        Scope {
            contexts: contexts.to_vec(),
            flags: flags.iter().map(|(n, v)| (n.to_string(), *v)).collect(),
            sub_context: None,
        }
    }

    #[test]
    fn lists_global_shortcuts() {
        let config = WardConfig::default();
        let index = active_index(&config, &scope(&[ShortcutContext::Global], &[]));
        let out = render(&index);

        assert!(out.starts_with("global\n"));
        assert!(out.contains("open-command-palette"));
        assert!(out.contains("goto-patients"));
        if !cfg!(target_os = "macos") {
            assert!(out.contains("Ctrl+K"));
            assert!(out.contains("G then P"));
        }
    }

    #[test]
    fn conditions_filter_listing() {
        let config = WardConfig::default();

        let index = active_index(&config, &scope(&[ShortcutContext::Patient], &[]));
        assert!(!render(&index).contains("edit-patient"));

        let index = active_index(
            &config,
            &scope(&[ShortcutContext::Patient], &[("canEdit", true)]),
        );
        assert!(render(&index).contains("edit-patient"));
    }

    #[test]
    fn rows_are_aligned_and_trimmed() {
        let mut config = WardConfig::default();
        config.shortcuts.global = vec![
            ShortcutDef::new("g p", "goto-patients", "Go to patients"),
            ShortcutDef::new("g h", "goto-home", ""),
        ];
        let index = active_index(&config, &scope(&[ShortcutContext::Global], &[]));

        assert_eq!(
            render(&index),
            "global\n  G then P         goto-patients            Go to patients\n  G then H         goto-home\n"
        );
    }

    #[test]
    fn empty_listing() {
        let mut config = WardConfig::default();
        config.shortcuts.patient.clear();
        let s = scope(&[ShortcutContext::Patient], &[]);
        assert_eq!(s.conditions(), Conditions::new());

        let index = active_index(&config, &s);
        assert_eq!(render(&index), "no active shortcuts\n");
    }
}
