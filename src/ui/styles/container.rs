// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Page backdrop behind the aurora layer.
pub fn page(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.background)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Translucent card laid over the background (about cards, post cards, navbar).
pub fn card(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: scheme.text_secondary.scale_alpha(0.25),
        },
        ..Default::default()
    }
}

/// Small rounded label for tags and tech items.
pub fn tag(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.accent.scale_alpha(0.2))),
        text_color: Some(scheme.accent),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: scheme.accent.scale_alpha(0.3),
        },
        ..Default::default()
    }
}
