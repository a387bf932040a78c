// SPDX-License-Identifier: MPL-2.0
//! Document-level attributes shared by every view.
//!
//! The document exposes the active theme and language to anything that
//! renders: views, the aurora background, the window title. Each attribute is
//! an [`Observable`], so consumers take a reference to the document instead of
//! reading ambient state, and react through subscriptions.

use crate::config::{DEFAULT_LANGUAGE, DEFAULT_THEME};
use crate::locale::LanguageCode;
use crate::observable::Observable;
use crate::ui::theming::ThemeMode;

/// Attribute carrying the theme name.
pub const DATA_THEME: &str = "data-theme";
/// Attribute carrying the language code for styling hooks.
pub const DATA_LANG: &str = "data-lang";
/// Attribute carrying the document language.
pub const LANG: &str = "lang";

#[derive(Debug, Clone)]
pub struct Document {
    language: Observable<LanguageCode>,
    theme: Observable<ThemeMode>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, DEFAULT_THEME)
    }
}

impl Document {
    #[must_use]
    pub fn new(language: LanguageCode, theme: ThemeMode) -> Self {
        Self {
            language: Observable::new(language),
            theme: Observable::new(theme),
        }
    }

    /// Language attribute (`data-lang` and `lang` both derive from it).
    #[must_use]
    pub fn language(&self) -> &Observable<LanguageCode> {
        &self.language
    }

    /// Theme attribute (`data-theme`).
    #[must_use]
    pub fn theme(&self) -> &Observable<ThemeMode> {
        &self.theme
    }

    /// Reads an attribute by name, as a stylesheet would.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            DATA_THEME => Some(self.theme.get().as_str().to_string()),
            DATA_LANG | LANG => Some(self.language.get().as_str().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_uses_default_preferences() {
        let document = Document::default();
        assert_eq!(document.attribute(DATA_THEME).as_deref(), Some("dark"));
        assert_eq!(document.attribute(LANG).as_deref(), Some("fr"));
    }

    #[test]
    fn language_attributes_stay_in_step() {
        let document = Document::default();
        document.language().set(LanguageCode::En);
        assert_eq!(document.attribute(DATA_LANG), document.attribute(LANG));
        assert_eq!(document.attribute(LANG).as_deref(), Some("en"));
    }

    #[test]
    fn unknown_attribute_is_absent() {
        assert_eq!(Document::default().attribute("dir"), None);
    }
}
