//! Ward shortcut configuration.
//!
//! Provides the versioned shortcut table (TOML or JSON), the `when`
//! condition language, and load-time validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ward_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod condition;
pub mod schema;
pub mod shortcuts;
pub mod toml_loader;
pub mod validation;

pub use condition::{Condition, Conditions};
pub use schema::{ShortcutContext, ShortcutDef, ShortcutTable, WardConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use ward_common::ConfigError;

/// Load and validate the config.
///
/// Reads `path` when given, otherwise the platform default (creating it if
/// missing). Unlike [`toml_loader::load_from_path`], validation failures are
/// returned as errors so malformed keys and conditions are rejected up front.
pub fn load_config(path: Option<&Path>) -> Result<WardConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WardConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
