// SPDX-License-Identifier: MPL-2.0
//! `polymorphl` is a bilingual (French/English) portfolio and blog built with
//! the Iced GUI framework.
//!
//! The interesting pieces are the locale coordinator, which keeps the
//! persisted language preference, the document attributes and the current
//! path in agreement, and the aurora background, a small particle
//! simulation rendered behind every page.

pub mod app;
pub mod aurora;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod observable;
pub mod preferences;
pub mod ui;
