use crate::errors::KeymapError;

use super::types::{KeyBind, KeyPattern, Modifier};

/// Parses a single keystroke like `"k"`, `"ctrl+k"`, `"Cmd+Shift+P"`, or
/// `"shift+1"` into a [`KeyBind`].
///
/// Normalization rules:
/// - `"Ctrl"` / `"Control"` -> `Ctrl`
/// - `"Alt"` / `"Option"` / `"Opt"` -> `Alt`
/// - `"Meta"` / `"Cmd"` / `"Command"` / `"Super"` / `"Win"` -> `Meta`
/// - `"Shift"` -> `Shift`
///
/// Every token but the last must be a modifier. The last token is the key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, KeymapError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(KeymapError::Empty);
    }

    let tokens: Vec<&str> = trimmed.split('+').map(str::trim).collect();
    let (key_token, modifier_tokens) = tokens.split_last().ok_or(KeymapError::Empty)?;

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token)
            .ok_or_else(|| KeymapError::UnknownModifier((*token).to_string()))?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    if key_token.is_empty() {
        return Err(KeymapError::MissingKey(trimmed.to_string()));
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

/// Parses a full shortcut key string: a single keystroke or a two-key
/// prefix sequence separated by whitespace (`"g p"`).
///
/// Sequence keys must be plain keys. Sequences longer than two keys are
/// rejected.
pub fn parse_key_pattern(s: &str) -> Result<KeyPattern, KeymapError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err(KeymapError::Empty),
        [single] => parse_keybind(single).map(KeyPattern::Single),
        [first, second] => {
            let prefix = parse_keybind(first)?;
            let suffix = parse_keybind(second)?;
            if !prefix.modifiers.is_empty() || !suffix.modifiers.is_empty() {
                return Err(KeymapError::ModifiedSequence(s.trim().to_string()));
            }
            Ok(KeyPattern::Sequence {
                prefix: prefix.key,
                suffix: suffix.key,
            })
        }
        _ => Err(KeymapError::TooManyTokens(s.trim().to_string())),
    }
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "meta" | "cmd" | "command" | "super" | "win" => Some(Modifier::Meta),
        _ => None,
    }
}

/// Canonical lower-case name for a key token or a browser `KeyboardEvent.key`.
pub fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "backslash" => "\\".into(),
        "plus" => "+".into(),
        "spacebar" => "space".into(),
        "return" => "enter".into(),
        "esc" => "escape".into(),
        "del" => "delete".into(),
        "arrowup" => "up".into(),
        "arrowdown" => "down".into(),
        "arrowleft" => "left".into(),
        "arrowright" => "right".into(),
        _ => lower,
    }
}
