// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Preferences**: Persisted language/theme keys and their defaults
//! - **Aurora**: Background orb simulation parameters
//! - **Resize**: Debounce quiet period for viewport changes

use crate::locale::LanguageCode;
use crate::ui::theming::ThemeMode;
use std::time::Duration;

// ==========================================================================
// Preference Defaults
// ==========================================================================

/// Storage key holding the preferred language code.
pub const LANGUAGE_KEY: &str = "language";

/// Storage key holding the preferred theme.
pub const THEME_KEY: &str = "theme";

/// Language used when nothing (or nothing recognizable) is persisted.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::Fr;

/// Theme used when nothing (or nothing recognizable) is persisted.
pub const DEFAULT_THEME: ThemeMode = ThemeMode::Dark;

// ==========================================================================
// Aurora Defaults
// ==========================================================================

/// Number of orbs in the background simulation.
pub const ORB_COUNT: usize = 5;

/// Amplitude of the radius pulse, in simulation units.
pub const PULSE_AMPLITUDE: f32 = 20.0;

/// Maximum absolute initial velocity per axis, per frame.
pub const MAX_ORB_SPEED: f32 = 1.5;

/// Smallest pulse phase increment per frame.
pub const MIN_PULSE_SPEED: f32 = 0.01;

/// Largest pulse phase increment per frame.
pub const MAX_PULSE_SPEED: f32 = 0.03;

/// Smallest base radius, as a fraction of the simulation width.
pub const MIN_BASE_RADIUS_RATIO: f32 = 0.15;

/// Largest base radius, as a fraction of the simulation width.
pub const MAX_BASE_RADIUS_RATIO: f32 = 0.40;

/// Orb centre opacity in dark mode.
pub const DARK_CENTER_ALPHA: f32 = 0.4;

/// Orb centre opacity in light mode.
pub const LIGHT_CENTER_ALPHA: f32 = 0.25;

/// Simulation dimensions are this fraction of the window size.
pub const VIEWPORT_SCALE: f32 = 0.5;

/// Interval between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// ==========================================================================
// Resize Defaults
// ==========================================================================

/// Quiet period after the last resize event before the orbs are rebuilt.
pub const RESIZE_QUIET_PERIOD: Duration = Duration::from_millis(200);

const _: () = {
    assert!(ORB_COUNT > 0);
    assert!(MIN_PULSE_SPEED < MAX_PULSE_SPEED);
    assert!(MIN_BASE_RADIUS_RATIO < MAX_BASE_RADIUS_RATIO);
};
