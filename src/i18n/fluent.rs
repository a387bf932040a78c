// SPDX-License-Identifier: MPL-2.0
use crate::locale::LanguageCode;
use chrono::{Datelike, NaiveDate};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Localized interface text for every supported language.
pub struct I18n {
    bundles: HashMap<LanguageCode, FluentBundle<FluentResource>>,
    current: LanguageCode,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("languages", &self.bundles.len())
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(LanguageCode::default())
    }
}

impl I18n {
    pub fn new(language: LanguageCode) -> Self {
        let mut bundles = HashMap::new();

        for lang in LanguageCode::ALL {
            let filename = format!("{}.ftl", lang.as_str());
            let Some(content) = Asset::get(&filename) else {
                tracing::warn!(%filename, "missing translation file");
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((partial, errors)) => {
                    tracing::warn!(%filename, errors = errors.len(), "translation file has syntax errors");
                    partial
                }
            };

            let mut bundle = FluentBundle::new(vec![lang.langid()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%filename, errors = errors.len(), "duplicate translation messages");
            }
            bundles.insert(lang, bundle);
        }

        Self {
            bundles,
            current: language,
        }
    }

    pub fn set_language(&mut self, language: LanguageCode) {
        self.current = language;
    }

    #[must_use]
    pub fn current(&self) -> LanguageCode {
        self.current
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    /// Long-form date in the current language, e.g. `15 février 2025` or
    /// `February 15, 2025`. Input that is not `YYYY-MM-DD` is returned as is.
    pub fn format_date(&self, raw: &str) -> String {
        let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
            return raw.to_string();
        };
        let month = self.tr(&format!("month-{}", date.month()));
        let day = date.day().to_string();
        let year = date.year().to_string();
        self.tr_with_args(
            "post-date",
            &[("day", &day), ("month", &month), ("year", &year)],
        )
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}
