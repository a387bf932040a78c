// SPDX-License-Identifier: MPL-2.0
//! Language codes and the coordinator that keeps them consistent.
//!
//! The site ships in exactly two languages. Every language value that enters
//! the crate (persisted preference, URL segment, CLI flag) passes through
//! [`resolve_language`], so nothing downstream ever holds an unsupported code.

mod coordinator;
pub mod routing;

pub use coordinator::LocaleCoordinator;

use serde::{Deserialize, Serialize};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Fr,
    En,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 2] = [LanguageCode::Fr, LanguageCode::En];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::Fr => "fr",
            LanguageCode::En => "en",
        }
    }

    /// Matches a code exactly (`"fr"`, `"en"`), nothing else.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.as_str() == code)
    }

    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        self.as_str().parse().unwrap_or_default()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes arbitrary input to a supported language. Never fails.
///
/// Input is trimmed and lowercased, then matched exactly, then by prefix
/// (`"en-US"` → `en`, `"fr_CA.UTF-8"` → `fr`). Anything else, including
/// `None` and the empty string, yields [`DEFAULT_LANGUAGE`](crate::config::DEFAULT_LANGUAGE).
#[must_use]
pub fn resolve_language(raw: Option<&str>) -> LanguageCode {
    let Some(raw) = raw else {
        return crate::config::DEFAULT_LANGUAGE;
    };
    let normalized = raw.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return crate::config::DEFAULT_LANGUAGE;
    }

    if let Some(exact) = LanguageCode::from_code(&normalized) {
        return exact;
    }

    LanguageCode::ALL
        .into_iter()
        .find(|lang| normalized.starts_with(lang.as_str()))
        .unwrap_or(crate::config::DEFAULT_LANGUAGE)
}
