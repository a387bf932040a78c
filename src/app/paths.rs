// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--content-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`POLYMORPHL_CONFIG_DIR`, `POLYMORPHL_CONTENT_DIR`)
//! 4. **Default** - platform config dir via `dirs`, or the bundled `content/blog`
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.content_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Polymorphl";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "POLYMORPHL_CONFIG_DIR";

/// Environment variable to override the blog content directory.
pub const ENV_CONTENT_DIR: &str = "POLYMORPHL_CONTENT_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for content directory (set once at startup).
static CLI_CONTENT_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for config and content directories.
///
/// Later calls are ignored: the first value set wins for the lifetime of the process.
pub fn init_cli_overrides(config_dir: Option<String>, content_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
    if CLI_CONTENT_DIR.set(content_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("content dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_content_dir() -> Option<PathBuf> {
    CLI_CONTENT_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`.
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the blog content directory.
pub fn get_content_dir() -> PathBuf {
    get_content_dir_with_override(None)
}

/// Returns the blog content directory with an optional override.
///
/// Falls back to the `content/blog` tree shipped next to the manifest.
pub fn get_content_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    if let Some(path) = get_cli_content_dir() {
        return path;
    }

    if let Some(path) = env_dir(ENV_CONTENT_DIR) {
        return path;
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("content")
        .join("blog")
}
