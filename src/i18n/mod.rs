// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Interface text for every [`LanguageCode`](crate::locale::LanguageCode) is
//! embedded at build time, so switching language never touches the disk.
//!
//! # Features
//!
//! - Embedded `.ftl` translation files, one per supported language
//! - Runtime language switching driven by the locale coordinator
//! - Localized long-form dates for blog posts
//! - Visible `MISSING: key` markers for untranslated messages

pub mod fluent;

pub use fluent::I18n;
