//! Configuration management for todo.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. An explicit file, or the project-local `todo.toml`
//! 3. User config `<config_dir>/todo/config.toml`
//! 4. Built-in defaults (lowest priority)

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration.
    pub log: LogConfig,

    /// How user input is parsed.
    pub input: InputConfig,

    /// How tasks are rendered.
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./todo.toml` (project local)
    /// 2. `<config_dir>/todo/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text without consulting the environment.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("TODO_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(format) = std::env::var("TODO_DATE_FORMAT") {
            self.input.date_format = format;
        }
        if let Ok(format) = std::env::var("TODO_DISPLAY_DATE_FORMAT") {
            self.display.date_format = format;
        }
    }

    /// Rejects values that would break the prompt loop later on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_date_format("input.date_format", &self.input.date_format)?;
        check_date_format("display.date_format", &self.display.date_format)?;
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        Config::default().to_toml_string()
    }

    /// Render this configuration as TOML.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

fn check_date_format(key: &str, format: &str) -> Result<(), ConfigError> {
    if format.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{key} is empty")));
    }
    if StrftimeItems::new(format).any(|item| item == Item::Error) {
        return Err(ConfigError::Invalid(format!(
            "{key} is not a valid date format: {format}"
        )));
    }
    Ok(())
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. "warn" or "todo_core=debug".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Input parsing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// `chrono` format for due dates typed at the prompt.
    pub date_format: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_INPUT_DATE_FORMAT.to_string(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `chrono` format for due dates in listings.
    pub date_format: String,

    /// Flag open tasks whose due date has passed.
    pub show_overdue: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DISPLAY_DATE_FORMAT.to_string(),
            show_overdue: DEFAULT_SHOW_OVERDUE,
        }
    }
}
