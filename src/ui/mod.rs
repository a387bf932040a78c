// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`home`] - Hero, about cards and tech stack
//! - [`blog`] - Blog index and post pages
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with language picker and theme toggle
//! - [`background`] - Aurora background layer
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme modes, color schemes and the theme owner

pub mod background;
pub mod blog;
pub mod design_tokens;
pub mod home;
pub mod navbar;
pub mod styles;
pub mod theming;
