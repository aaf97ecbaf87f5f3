//! # Configuration
//!
//! Settings live in `config.json` inside the data directory. Missing fields
//! fall back to their defaults, and a missing file is the same as `{}`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `reminder-time` | `09:00` | Local time for the daily puzzle reminder (HH:MM) |
//! | `show-hints` | `false` | Show the hint together with the puzzle |
//! | `catalog` | built-in | Path to a JSON puzzle catalog |
//!
//! ## CLI Usage
//!
//! - `qrdaily config`: Show all configuration values.
//! - `qrdaily config <key>`: Get a specific value.
//! - `qrdaily config <key> <value>`: Set a value. `catalog none` resets it.

use crate::error::{QrDailyError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_REMINDER_TIME: &str = "09:00";
const TIME_FORMAT: &str = "%H:%M";

pub const CONFIG_KEYS: &[&str] = &["reminder-time", "show-hints", "catalog"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QrDailyConfig {
    #[serde(default = "default_reminder_time")]
    pub reminder_time: String,

    #[serde(default)]
    pub show_hints: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

fn default_reminder_time() -> String {
    DEFAULT_REMINDER_TIME.to_string()
}

impl Default for QrDailyConfig {
    fn default() -> Self {
        Self {
            reminder_time: default_reminder_time(),
            show_hints: false,
            catalog_path: None,
        }
    }
}

impl QrDailyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QrDailyError::Io)?;
        let config: QrDailyConfig = serde_json::from_str(&content)
            .map_err(|e| QrDailyError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QrDailyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QrDailyError::Serialization)?;
        fs::write(config_path, content).map_err(QrDailyError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        parse_time(&self.reminder_time)
            .map(|_| ())
            .map_err(QrDailyError::Config)
    }

    pub fn reminder_time(&self) -> Result<NaiveTime> {
        parse_time(&self.reminder_time).map_err(QrDailyError::Config)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "reminder-time" => Some(self.reminder_time.clone()),
            "show-hints" => Some(self.show_hints.to_string()),
            "catalog" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "reminder-time" => {
                let time = parse_time(value)?;
                self.reminder_time = time.format(TIME_FORMAT).to_string();
            }
            "show-hints" => {
                self.show_hints = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => return Err(format!("Expected true or false, got '{}'", value)),
                };
            }
            "catalog" => {
                self.catalog_path = match value {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_time(value: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| format!("Invalid reminder time '{}', expected HH:MM", value))
}
