//! Dispatcher and logging settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time an armed prefix key waits for its follow-up key.
pub const DEFAULT_PREFIX_TIMEOUT_MS: u64 = 2000;

/// Key dispatch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// How long an armed prefix waits for a suffix key (valid range: 250-10000).
    pub prefix_timeout_ms: u64,
}

impl DispatchConfig {
    pub fn prefix_timeout(&self) -> Duration {
        Duration::from_millis(self.prefix_timeout_ms)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            prefix_timeout_ms: DEFAULT_PREFIX_TIMEOUT_MS,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
