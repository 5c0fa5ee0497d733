use super::types::{KeyBind, KeyPattern, Modifier};

/// Converts a [`KeyBind`] into a platform-appropriate display string.
///
/// On macOS, modifiers are displayed as symbols. On other platforms, they
/// are displayed as text names separated by `+`.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut modifiers = kb.modifiers.clone();
    modifiers.sort();

    let mut parts: Vec<String> = modifiers.into_iter().map(display_modifier).collect();
    parts.push(display_key(&kb.key));
    join_display_parts(&parts)
}

/// Display string for a whole shortcut key, e.g. `"Ctrl+K"` or `"G then P"`.
pub fn pattern_to_display(pattern: &KeyPattern) -> String {
    match pattern {
        KeyPattern::Single(kb) => keybind_to_display(kb),
        KeyPattern::Sequence { prefix, suffix } => {
            format!("{} then {}", display_key(prefix), display_key(suffix))
        }
    }
}

fn display_modifier(modifier: Modifier) -> String {
    if cfg!(target_os = "macos") {
        match modifier {
            Modifier::Ctrl => "\u{2303}".into(),  // ⌃
            Modifier::Alt => "\u{2325}".into(),   // ⌥
            Modifier::Shift => "\u{21E7}".into(), // ⇧
            Modifier::Meta => "\u{2318}".into(),  // ⌘
        }
    } else {
        match modifier {
            Modifier::Ctrl => "Ctrl".into(),
            Modifier::Alt => "Alt".into(),
            Modifier::Shift => "Shift".into(),
            Modifier::Meta => {
                if cfg!(target_os = "windows") {
                    "Win".into()
                } else {
                    "Meta".into()
                }
            }
        }
    }
}

fn display_key(key: &str) -> String {
    if cfg!(target_os = "macos") {
        match key {
            "enter" => return "\u{21A9}".into(),     // ↩
            "backspace" => return "\u{232B}".into(), // ⌫
            "delete" => return "\u{2326}".into(),    // ⌦
            "escape" => return "\u{238B}".into(),    // ⎋
            "tab" => return "\u{21E5}".into(),       // ⇥
            "space" => return "\u{2423}".into(),     // ␣
            "up" => return "\u{2191}".into(),        // ↑
            "down" => return "\u{2193}".into(),      // ↓
            "left" => return "\u{2190}".into(),      // ←
            "right" => return "\u{2192}".into(),     // →
            _ => {}
        }
    }

    let mut chars = key.chars();
    match chars.next() {
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            match key {
                "pageup" => "PageUp".into(),
                "pagedown" => "PageDown".into(),
                _ => format!("{upper}{}", chars.as_str()),
            }
        }
        None => String::new(),
    }
}

fn join_display_parts(parts: &[String]) -> String {
    if cfg!(target_os = "macos") {
        parts.join("")
    } else {
        parts.join("+")
    }
}
