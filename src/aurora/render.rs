// SPDX-License-Identifier: MPL-2.0
//! Rasterization of an aurora frame with `tiny-skia`.
//!
//! The simulator produces a [`FramePlan`] (pure data) every tick; this module
//! turns it into straight-alpha RGBA bytes ready for an image handle.

use crate::config::{DARK_CENTER_ALPHA, LIGHT_CENTER_ALPHA};
use crate::ui::theming::ThemeMode;
use tiny_skia::{
    Color, FillRule, GradientStop, Paint, PathBuilder, Pixmap, Point, RadialGradient, SpreadMode,
    Transform,
};

/// How orbs combine with what is already drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Lightening blend, used on dark backgrounds.
    Screen,
    /// Darkening blend, used on light backgrounds.
    Multiply,
}

impl BlendMode {
    #[must_use]
    pub fn for_theme(theme: ThemeMode) -> Self {
        if theme.is_dark() {
            BlendMode::Screen
        } else {
            BlendMode::Multiply
        }
    }

    fn to_skia(self) -> tiny_skia::BlendMode {
        match self {
            BlendMode::Screen => tiny_skia::BlendMode::Screen,
            BlendMode::Multiply => tiny_skia::BlendMode::Multiply,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn with_alpha(self, alpha: f32) -> Color {
        let mut color = Color::from_rgba8(self.r, self.g, self.b, 255);
        color.set_alpha(alpha.clamp(0.0, 1.0));
        color
    }
}

pub const DARK_PALETTE: [Rgb; 3] = [
    Rgb::new(255, 60, 20),
    Rgb::new(60, 60, 180),
    Rgb::new(120, 20, 120),
];

pub const LIGHT_PALETTE: [Rgb; 3] = [
    Rgb::new(255, 120, 80),
    Rgb::new(100, 120, 255),
    Rgb::new(200, 50, 100),
];

#[must_use]
pub fn palette(theme: ThemeMode) -> &'static [Rgb; 3] {
    if theme.is_dark() {
        &DARK_PALETTE
    } else {
        &LIGHT_PALETTE
    }
}

#[must_use]
pub fn center_alpha(theme: ThemeMode) -> f32 {
    if theme.is_dark() {
        DARK_CENTER_ALPHA
    } else {
        LIGHT_CENTER_ALPHA
    }
}

/// One orb as it should be painted this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbPaint {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    /// Opacity at the centre; the edge is always fully transparent.
    pub center_alpha: f32,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub width: u32,
    pub height: u32,
    pub blend: BlendMode,
    pub orbs: Vec<OrbPaint>,
}

/// Straight-alpha RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Draws `plan` onto a transparent surface.
///
/// Returns `None` when the surface cannot be allocated (zero-sized plan).
#[must_use]
pub fn rasterize(plan: &FramePlan) -> Option<RgbaImage> {
    let mut pixmap = Pixmap::new(plan.width, plan.height)?;

    for orb in &plan.orbs {
        if orb.radius <= 0.0 {
            continue;
        }
        let center = Point::from_xy(orb.x, orb.y);
        let stops = vec![
            GradientStop::new(0.0, orb.color.with_alpha(orb.center_alpha)),
            GradientStop::new(1.0, orb.color.with_alpha(0.0)),
        ];
        let Some(shader) = RadialGradient::new(
            center,
            center,
            orb.radius,
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ) else {
            continue;
        };
        let Some(path) = PathBuilder::from_circle(orb.x, orb.y, orb.radius) else {
            continue;
        };

        let paint = Paint {
            shader,
            blend_mode: plan.blend.to_skia(),
            anti_alias: true,
            ..Paint::default()
        };
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    let mut pixels = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        pixels.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    Some(RgbaImage {
        width: plan.width,
        height: plan.height,
        pixels,
    })
}
