// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window lifecycle events drive the aurora (mount, resize, dispose); the
//! frame clock only runs while the aurora does.

use super::Message;
use crate::config::FRAME_INTERVAL;
use iced::{event, time, window, Subscription};

/// Routes window lifecycle events; everything else is left to widgets.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowOpened(size))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Closed) => Some(Message::WindowClosed),
        _ => None,
    })
}

/// Creates the per-frame tick subscription while the background animates.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
