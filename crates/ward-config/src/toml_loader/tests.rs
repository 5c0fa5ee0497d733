//! Tests for config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, ShortcutTable, WardConfig};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_ward_shortcuts.toml"));
    assert!(matches!(
        result,
        Err(ward_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortcuts.toml");
    std::fs::write(
        &path,
        r#"
[dispatch]
prefix_timeout_ms = 1500

[[shortcuts.patient]]
key = "ctrl+shift+n"
action = "new-encounter"
description = "Start a new encounter"
when = "canCreate && !readOnly"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.dispatch.prefix_timeout_ms, 1500);
    assert_eq!(config.shortcuts.patient.len(), 1);
    assert_eq!(config.shortcuts.patient[0].when, "canCreate && !readOnly");
    // Defaults preserved
    assert_eq!(config.logging.level, LogLevel::Info);
    assert_eq!(config.shortcuts.global, ShortcutTable::default().global);
}

#[test]
fn load_json_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortcuts.json");
    std::fs::write(
        &path,
        r#"{
  "schema_version": 1,
  "shortcuts": {
    "encounter": [
      { "key": "g q", "action": "goto-questionnaires", "description": "Questionnaires",
        "when": "questionnairesEnabled", "subContext": "clinical" }
    ]
  }
}"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.shortcuts.encounter.len(), 1);
    assert_eq!(
        config.shortcuts.encounter[0].sub_context.as_deref(),
        Some("clinical")
    );
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortcuts.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(ward_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shortcuts.toml");
    std::fs::write(
        &path,
        r#"
[[shortcuts.global]]
key = "g p x"
action = "too-long"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.shortcuts.global[0].key, "g p x");
}

#[test]
fn write_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("ward").join("shortcuts.toml");

    write_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, WardConfig::default());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config = parse_config(default_config_toml(), false).unwrap();
    assert_eq!(config, WardConfig::default());
}

#[test]
fn parse_config_reports_format() {
    let err = parse_config("{", true).unwrap_err().to_string();
    assert!(err.contains("failed to parse JSON"));

    let err = parse_config("[[", false).unwrap_err().to_string();
    assert!(err.contains("failed to parse TOML"));
}

#[test]
fn default_config_path_is_reasonable() {
    // No config dir in some sandboxes
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with(Path::new("ward").join("shortcuts.toml")));
    }
}
