// SPDX-License-Identifier: MPL-2.0
//! Theme modes, color schemes, and the theme preference owner.

use crate::config::{DEFAULT_THEME, THEME_KEY};
use crate::document::Document;
use crate::preferences::PreferenceStore;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parses a persisted value; anything unrecognized yields the default theme.
    #[must_use]
    pub fn from_str_lossy(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            _ => DEFAULT_THEME,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color palette for a theme.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::PAPER_50,
            surface: Color {
                a: 0.8,
                ..palette::PAPER_100
            },
            text_primary: palette::INK_900,
            text_secondary: palette::INK_700,
            accent: palette::EMBER_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::INK_950,
            surface: Color {
                a: 0.7,
                ..palette::INK_900
            },
            text_primary: palette::WHITE,
            text_secondary: palette::INK_200,
            accent: palette::EMBER_400,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Owner of the theme preference.
///
/// Writes the persisted value first, then publishes to the document's theme
/// attribute, so observers reading storage during notification agree.
pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    document: Document,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode())
            .finish()
    }
}

impl ThemeController {
    pub fn new(store: Arc<dyn PreferenceStore>, document: Document) -> Self {
        let stored = store.get(THEME_KEY);
        let initial = ThemeMode::from_str_lossy(stored.as_deref());
        if stored.as_deref() != Some(initial.as_str()) {
            if let Err(error) = store.set(THEME_KEY, initial.as_str()) {
                tracing::warn!(%error, "failed to persist initial theme");
            }
        }
        document.theme().set(initial);

        Self { store, document }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.document.theme().get()
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        if let Err(error) = self.store.set(THEME_KEY, mode.as_str()) {
            tracing::warn!(%error, theme = %mode, "failed to persist theme");
        }
        self.document.theme().set(mode);
        tracing::debug!(theme = %mode, "theme changed");
    }

    /// Switches light ↔ dark and returns the new mode.
    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.mode().toggled();
        self.set_theme(next);
        next
    }
}
