// SPDX-License-Identifier: MPL-2.0
//! Aurora layer: turns a rasterized frame into an image that fills the window.

use crate::aurora::{self, FramePlan};
use iced::widget::image::{Handle, Image};
use iced::{ContentFit, Element, Length};

/// Rasterizes `plan` into an image handle.
///
/// Returns `None` for an empty plan; callers simply draw no background.
#[must_use]
pub fn render(plan: &FramePlan) -> Option<Handle> {
    let image = aurora::rasterize(plan)?;
    Some(Handle::from_rgba(image.width, image.height, image.pixels))
}

/// Stretches the half-resolution frame over the whole window.
pub fn view<'a, Message: 'a>(handle: &Handle) -> Element<'a, Message> {
    Image::new(handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Fill)
        .into()
}
