// SPDX-License-Identifier: MPL-2.0
//! Decorative background: a handful of pulsing, drifting orbs.
//!
//! The simulation runs at half the window resolution. Orbs move by their
//! velocity each frame and bounce softly when their leading edge leaves the
//! viewport: only the velocity sign changes, so an orb may overshoot a
//! little before it turns around.
//!
//! The current theme is read from the document's theme observable through a
//! [`Watcher`]; a theme change only affects colors and blending of later
//! frames, never positions.

pub mod debounce;
pub mod render;

pub use debounce::Debouncer;
pub use render::{rasterize, BlendMode, FramePlan, OrbPaint, RgbaImage};

use crate::config::{
    MAX_BASE_RADIUS_RATIO, MAX_ORB_SPEED, MAX_PULSE_SPEED, MIN_BASE_RADIUS_RATIO, MIN_PULSE_SPEED,
    ORB_COUNT, PULSE_AMPLITUDE, RESIZE_QUIET_PERIOD, VIEWPORT_SCALE,
};
use crate::observable::{Observable, Watcher};
use crate::ui::theming::ThemeMode;
use iced::Size;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::time::Instant;

/// Simulation area, derived from the window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scales a window size down to simulation resolution.
    #[must_use]
    pub fn from_window(window: Size) -> Self {
        Self::new(window.width * VIEWPORT_SCALE, window.height * VIEWPORT_SCALE)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width >= 1.0 && self.height >= 1.0)
    }

    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub base_radius: f32,
    pub vx: f32,
    pub vy: f32,
    pub pulse: f32,
    pub pulse_speed: f32,
}

impl Orb {
    /// A fresh orb placed anywhere in `viewport`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let base_radius = viewport.width
            * rng.random_range(MIN_BASE_RADIUS_RATIO..MAX_BASE_RADIUS_RATIO);
        let pulse = rng.random_range(0.0..TAU);
        Self {
            x: rng.random_range(0.0..viewport.width),
            y: rng.random_range(0.0..viewport.height),
            radius: base_radius + pulse.sin() * PULSE_AMPLITUDE,
            base_radius,
            vx: rng.random_range(-MAX_ORB_SPEED..MAX_ORB_SPEED),
            vy: rng.random_range(-MAX_ORB_SPEED..MAX_ORB_SPEED),
            pulse,
            pulse_speed: rng.random_range(MIN_PULSE_SPEED..MAX_PULSE_SPEED),
        }
    }

    /// Advances one frame.
    pub fn step(&mut self, viewport: Viewport) {
        self.x += self.vx;
        self.y += self.vy;
        self.pulse += self.pulse_speed;
        self.radius = self.base_radius + self.pulse.sin() * PULSE_AMPLITUDE;

        if self.x - self.radius < 0.0 {
            self.vx = self.vx.abs();
        } else if self.x + self.radius > viewport.width {
            self.vx = -self.vx.abs();
        }
        if self.y - self.radius < 0.0 {
            self.vy = self.vy.abs();
        } else if self.y + self.radius > viewport.height {
            self.vy = -self.vy.abs();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Running,
    Disposed,
}

/// Owns the orb set and drives it frame by frame.
///
/// `tick` is expected once per frame while [`is_running`](Self::is_running);
/// resize events go through a debouncer so a burst rebuilds the set once.
pub struct AuroraSimulator<R = StdRng> {
    lifecycle: Lifecycle,
    viewport: Viewport,
    orbs: Vec<Orb>,
    theme: ThemeMode,
    theme_watcher: Option<Watcher<ThemeMode>>,
    resize: Debouncer<Size>,
    rng: R,
    rebuilds: usize,
}

impl<R> std::fmt::Debug for AuroraSimulator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuroraSimulator")
            .field("lifecycle", &self.lifecycle)
            .field("viewport", &self.viewport)
            .field("orbs", &self.orbs.len())
            .field("theme", &self.theme)
            .finish()
    }
}

impl AuroraSimulator<StdRng> {
    #[must_use]
    pub fn new(theme: &Observable<ThemeMode>) -> Self {
        Self::with_rng(theme, StdRng::from_os_rng())
    }
}

impl<R: Rng> AuroraSimulator<R> {
    pub fn with_rng(theme: &Observable<ThemeMode>, rng: R) -> Self {
        let watcher = theme.watch();
        Self {
            lifecycle: Lifecycle::Uninitialized,
            viewport: Viewport::new(0.0, 0.0),
            orbs: Vec::new(),
            theme: watcher.current(),
            theme_watcher: Some(watcher),
            resize: Debouncer::new(RESIZE_QUIET_PERIOD),
            rng,
            rebuilds: 0,
        }
    }

    /// First mount against a window of `window` size.
    ///
    /// An unusable (empty) window leaves nothing to draw on: the simulator
    /// goes straight to [`Lifecycle::Disposed`] and stays inert.
    pub fn mount(&mut self, window: Size) {
        if self.lifecycle != Lifecycle::Uninitialized {
            return;
        }
        let viewport = Viewport::from_window(window);
        if viewport.is_empty() {
            tracing::debug!(?window, "no drawable area; background disabled");
            self.dispose();
            return;
        }
        self.rebuild(viewport);
        self.lifecycle = Lifecycle::Running;
        tracing::debug!(?viewport, "aurora running");
    }

    /// Records a resize; the rebuild happens on the first tick after the
    /// quiet period.
    pub fn on_resize(&mut self, window: Size, now: Instant) {
        if self.lifecycle == Lifecycle::Running {
            self.resize.trigger(window, now);
        }
    }

    /// One animation frame: settle pending resizes, pick up theme changes,
    /// then advance every orb.
    pub fn tick(&mut self, now: Instant) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        if let Some(window) = self.resize.poll(now) {
            let viewport = Viewport::from_window(window);
            if viewport.is_empty() {
                tracing::debug!(?window, "window collapsed; keeping previous orbs");
            } else {
                self.rebuild(viewport);
            }
        }
        self.sync_theme();
        self.step();
    }

    /// Advances every orb by one frame without touching timers or theme.
    pub fn step(&mut self) {
        let viewport = self.viewport;
        for orb in &mut self.orbs {
            orb.step(viewport);
        }
    }

    /// Stops the simulation and releases the theme subscription.
    pub fn dispose(&mut self) {
        self.lifecycle = Lifecycle::Disposed;
        self.resize.cancel();
        self.theme_watcher = None;
        self.orbs.clear();
    }

    fn rebuild(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.orbs = (0..ORB_COUNT)
            .map(|_| Orb::random(&mut self.rng, viewport))
            .collect();
        self.rebuilds += 1;
    }

    fn sync_theme(&mut self) {
        if let Some(theme) = self.theme_watcher.as_mut().and_then(Watcher::changed) {
            self.theme = theme;
        }
    }
}

impl<R> AuroraSimulator<R> {
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn blend_mode(&self) -> BlendMode {
        BlendMode::for_theme(self.theme)
    }

    /// Number of times the orb set has been (re)created.
    #[must_use]
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    #[must_use]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// What to draw for the current state, or `None` when not running.
    #[must_use]
    pub fn frame_plan(&self) -> Option<FramePlan> {
        if self.lifecycle != Lifecycle::Running {
            return None;
        }
        let (width, height) = self.viewport.pixel_size();
        let colors = render::palette(self.theme);
        let alpha = render::center_alpha(self.theme);
        Some(FramePlan {
            width,
            height,
            blend: self.blend_mode(),
            orbs: self
                .orbs
                .iter()
                .enumerate()
                .map(|(index, orb)| OrbPaint {
                    x: orb.x,
                    y: orb.y,
                    radius: orb.radius,
                    color: colors[index % colors.len()],
                    center_alpha: alpha,
                })
                .collect(),
        })
    }
}
