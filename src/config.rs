//! Configuration management with YAML support

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "dating-tracker.yaml";
const DATABASE_FILE_NAME: &str = "contacts.db";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub reminders: ReminderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file; `None` keeps it next to the executable.
    #[serde(default)]
    pub path: Option<String>,
}

/// Reminder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Open contacts untouched for more than this many days are due.
    #[serde(default = "default_threshold_days")]
    pub threshold_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_threshold_days() -> i64 {
    7
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            threshold_days: default_threshold_days(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    /// Searches in order:
    /// 1. Provided path
    /// 2. ./dating-tracker.yaml (current directory)
    /// 3. <config dir>/dating-tracker/dating-tracker.yaml
    pub fn load(path: &str) -> Result<Self> {
        let mut search_paths = vec![
            PathBuf::from(shellexpand::tilde(path).to_string()),
            PathBuf::from(CONFIG_FILE_NAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            search_paths.push(dir.join("dating-tracker").join(CONFIG_FILE_NAME));
        }

        for search_path in &search_paths {
            if search_path.exists() {
                return Self::from_file(search_path);
            }
        }

        // No config file found, use defaults
        Ok(Config::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        if config.reminders.threshold_days < 0 {
            anyhow::bail!(
                "invalid config {}: reminders.threshold_days must not be negative",
                path.display()
            );
        }
        Ok(config)
    }

    /// Get the database path, expanding ~ to home directory.
    /// Defaults to `contacts.db` beside the running executable.
    pub fn database_path(&self) -> PathBuf {
        match &self.database.path {
            Some(path) => PathBuf::from(shellexpand::tilde(path).to_string()),
            None => std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|dir| dir.join(DATABASE_FILE_NAME)))
                .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_NAME)),
        }
    }
}
