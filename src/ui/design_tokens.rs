// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **Palette**: Base colors
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const INK_950: Color = Color::from_rgb(0.04, 0.04, 0.06);
    pub const INK_900: Color = Color::from_rgb(0.08, 0.08, 0.11);
    pub const INK_700: Color = Color::from_rgb(0.27, 0.27, 0.32);
    pub const INK_400: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const INK_200: Color = Color::from_rgb(0.78, 0.78, 0.82);
    pub const PAPER_50: Color = Color::from_rgb(0.98, 0.97, 0.95);
    pub const PAPER_100: Color = Color::from_rgb(0.94, 0.93, 0.9);

    // Accent (ember scale)
    pub const EMBER_400: Color = Color::from_rgb(1.0, 0.47, 0.31);
    pub const EMBER_600: Color = Color::from_rgb(0.86, 0.27, 0.12);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Maximum width of the main column.
    pub const CONTENT_MAX_WIDTH: f32 = 1000.0;
    pub const NAVBAR_HEIGHT: f32 = 56.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 40.0;
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 15.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_eight_pixel_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn typography_scale_is_descending() {
        assert!(typography::DISPLAY > typography::TITLE_LG);
        assert!(typography::TITLE_LG > typography::TITLE_MD);
        assert!(typography::TITLE_MD > typography::BODY);
        assert!(typography::BODY > typography::CAPTION);
    }
}
