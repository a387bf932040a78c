// SPDX-License-Identifier: MPL-2.0
//! Client-local key/value storage for persisted preferences.
//!
//! Values are plain strings under fixed keys (see [`crate::config::LANGUAGE_KEY`]
//! and [`crate::config::THEME_KEY`]). Stores are shared between the locale
//! coordinator and the theme controller, so writes go through `&self`.

use crate::config::{self, Config};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// String-valued preference storage.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used in tests and when no config directory exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by `settings.toml`; every write is flushed to disk.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    config: Mutex<Config>,
}

impl SettingsStore {
    /// Opens the store at `path`.
    ///
    /// Returns the store plus an optional warning key when the existing file
    /// could not be read; the store then starts from defaults.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<String>) {
        let path = path.into();
        let (config, warning) = if path.exists() {
            match config::load_from_path(&path) {
                Ok(config) => (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "unreadable settings; using defaults");
                    (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    )
                }
            }
        } else {
            (Config::default(), None)
        };

        (
            Self {
                path,
                config: Mutex::new(config),
            },
            warning,
        )
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the cached configuration.
    #[must_use]
    pub fn snapshot(&self) -> Config {
        self.config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PreferenceStore for SettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(str::to_string)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let snapshot = {
            let mut config = self.config.lock().unwrap_or_else(PoisonError::into_inner);
            if !config.set(key, value) {
                return Err(Error::Config(format!("unknown preference key: {key}")));
            }
            config.clone()
        };
        config::save_to_path(&snapshot, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LANGUAGE_KEY, THEME_KEY};
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get(LANGUAGE_KEY), None);
        store.set(LANGUAGE_KEY, "en").expect("memory write");
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn settings_store_writes_through_to_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let (store, warning) = SettingsStore::open(&path);
        assert!(warning.is_none());
        store.set(THEME_KEY, "light").expect("write theme");

        let (reopened, _) = SettingsStore::open(&path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(reopened.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn settings_store_rejects_unknown_keys() {
        let dir = tempdir().expect("temp dir");
        let (store, _) = SettingsStore::open(dir.path().join("settings.toml"));
        assert!(matches!(store.set("font", "serif"), Err(Error::Config(_))));
    }

    #[test]
    fn corrupt_settings_start_from_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "language = = 'fr'").expect("write");

        let (store, warning) = SettingsStore::open(&path);
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(store.snapshot(), Config::default());
    }
}
