// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The file holds the two persisted preferences, stored as plain strings so
//! a hand-edited value never prevents startup:
//!
//! ```toml
//! language = "fr"
//! theme = "dark"
//! ```
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `POLYMORPHL_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use polymorphl::config::{self, Config};
//!
//! let path = config::config_path_with_override(None).expect("no config directory");
//! let mut config = config::load_from_path(&path).unwrap_or_default();
//! config.language = Some("en".to_string());
//! config::save_to_path(&config, &path).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Persisted user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Raw language code as last written (normalized on read).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Raw theme name as last written (normalized on read).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Config {
    /// Returns the stored value for a preference key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            LANGUAGE_KEY => self.language.as_deref(),
            THEME_KEY => self.theme.as_deref(),
            _ => None,
        }
    }

    /// Stores a preference value. Returns `false` for keys this file does not hold.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match key {
            LANGUAGE_KEY => self.language = Some(value.to_string()),
            THEME_KEY => self.theme = Some(value.to_string()),
            _ => return false,
        }
        true
    }
}

/// Returns the config file path with an optional override directory.
#[must_use]
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            language: Some("en".to_string()),
            theme: Some("light".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn config_path_uses_override_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = config_path_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(path, Some(temp_dir.path().join(CONFIG_FILE)));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let config: Config = toml::from_str("theme = \"light\"").expect("valid toml");
        assert_eq!(config.theme.as_deref(), Some("light"));
        assert_eq!(config.language, None);
        assert_eq!(toml::to_string(&Config::default()).expect("serialize"), "");
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut config = Config::default();
        assert!(config.set(LANGUAGE_KEY, "en"));
        assert!(!config.set("font", "serif"));
        assert_eq!(config.get(LANGUAGE_KEY), Some("en"));
        assert_eq!(config.get("font"), None);
    }
}
