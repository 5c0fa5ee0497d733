//! Full configuration validation.
//!
//! Validates the schema version, dispatch timing, and every shortcut
//! definition. All problems are collected into a single `ConfigError`.

mod helpers;
mod shortcuts;


use crate::schema::{WardConfig, CONFIG_SCHEMA_VERSION};
use ward_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WardConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.schema_version != CONFIG_SCHEMA_VERSION {
        errors.push(format!(
            "schema_version = {} is not supported (expected {CONFIG_SCHEMA_VERSION})",
            config.schema_version
        ));
    }

    validate_range(
        &mut errors,
        "dispatch.prefix_timeout_ms",
        config.dispatch.prefix_timeout_ms,
        250,
        10_000,
    );

    shortcuts::validate_shortcuts(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
