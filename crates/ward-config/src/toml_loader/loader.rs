//! Core config loading: read from path or platform default.

use crate::schema::WardConfig;
use crate::shortcuts;
use crate::validation;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use ward_common::ConfigError;

use super::template::default_config_toml;

/// Directory under the platform config dir holding ward's files.
const CONFIG_DIR: &str = "ward";
const CONFIG_FILE: &str = "shortcuts.toml";

/// Config file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Parse config text. `json` selects JSON; anything else is TOML.
pub fn parse_config(content: &str, json: bool) -> Result<WardConfig, ConfigError> {
    if json {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))
    } else {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
    }
}

/// Load config from a specific file path.
///
/// `.json` files are parsed as JSON, everything else as TOML. Missing
/// fields use serde defaults. After loading, the config is validated; if
/// validation fails, a warning is logged and the parsed config is returned
/// as-is. Duplicate shortcuts are logged.
pub fn load_from_path(path: &Path) -> Result<WardConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = parse_config(&content, Format::for_path(path) == Format::Json)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }
    for duplicate in shortcuts::find_duplicates(&config.shortcuts) {
        warn!("{duplicate}");
    }

    info!(
        shortcuts = config.shortcuts.len(),
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}

/// Where the shortcut file lives when no path is given.
///
/// On macOS: `~/Library/Application Support/ward/shortcuts.toml`
/// On Linux: `~/.config/ward/shortcuts.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default shortcut file to `path`, creating parent
/// directories as needed.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", path, e))?;

    info!("wrote default shortcuts to {}", path.display());
    Ok(())
}

/// Load config from [`default_config_path`].
///
/// A missing file is not an error: the default file is written there and
/// the built-in defaults are returned.
pub fn load_default() -> Result<WardConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            write_default_config(&path)?;
            Ok(WardConfig::default())
        }
        result => result,
    }
}
