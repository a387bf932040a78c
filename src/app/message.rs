// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{blog, navbar};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Blog(blog::Message),
    /// The main window appeared with its initial inner size.
    WindowOpened(Size),
    WindowResized(Size),
    WindowClosed,
    /// Animation frame for the background.
    Tick(Instant),
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override (`fr`, `en`, or anything that resolves to them).
    pub lang: Option<String>,
    /// Optional theme override (`light` or `dark`).
    pub theme: Option<String>,
    /// Optional path to open on startup, e.g. `/en/blog/hello-world`.
    pub path: Option<String>,
}
