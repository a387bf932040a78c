// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every view.
//!
//! Styles take a [`ColorScheme`](crate::ui::theming::ColorScheme) rather than
//! reading the Iced `Theme`, so every surface follows the document theme.

pub mod button;
pub mod container;
