//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! A context list present in the file replaces the built-in list for that
//! context; contexts left out keep their defaults.

mod shortcut;
mod system;

pub use shortcut::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardConfig {
    pub schema_version: u32,
    pub dispatch: DispatchConfig,
    pub logging: LoggingConfig,
    pub shortcuts: ShortcutTable,
}

impl Default for WardConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            dispatch: DispatchConfig::default(),
            logging: LoggingConfig::default(),
            shortcuts: ShortcutTable::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
