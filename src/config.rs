//! Runtime configuration read from the environment at startup.

use crate::shared::errors::{AppError, Result};
use tracing::Level;

pub const APP_NAME_VAR: &str = "HOST_DASHBOARD_NAME";
pub const LOG_LEVEL_VAR: &str = "HOST_DASHBOARD_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    /// Baseline log level; a `RUST_LOG` filter still takes precedence.
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Host Dashboard".to_string(),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup(APP_NAME_VAR).filter(|v| !v.trim().is_empty()) {
            config.app_name = name.trim().to_string();
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_level = parse_log_level(&level)?;
        }

        Ok(config)
    }
}

fn parse_log_level(value: &str) -> Result<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(AppError::InvalidConfig {
            key: LOG_LEVEL_VAR.to_string(),
            value: value.to_string(),
        }),
    }
}
