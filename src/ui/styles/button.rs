// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Borderless text link (navbar entries, post titles).
pub fn link(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => scheme.accent,
            _ => scheme.text_primary,
        };
        button::Style {
            background: None,
            text_color,
            ..button::Style::default()
        }
    }
}

/// Pill used for toggles; `selected` fills it with the accent color.
pub fn pill(
    scheme: ColorScheme,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let (background, text_color) = if selected {
            (Some(Background::Color(scheme.accent)), Color::WHITE)
        } else if hovered {
            (Some(Background::Color(scheme.surface)), scheme.accent)
        } else {
            (None, scheme.text_secondary)
        };
        button::Style {
            background,
            text_color,
            border: Border {
                color: scheme.accent,
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..button::Style::default()
        }
    }
}
