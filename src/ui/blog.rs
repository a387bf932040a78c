// SPDX-License-Identifier: MPL-2.0
//! Blog index and post pages.

use crate::content::Post;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    font,
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenPost(String),
    BackToIndex,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
}

fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Published posts of the active language, newest first.
pub fn index<'a>(ctx: ViewContext<'a>, posts: &[&'a Post]) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("blog-title")).size(typography::TITLE_LG).font(bold()));

    if posts.is_empty() {
        return column
            .push(Text::new(ctx.i18n.tr("blog-no-posts")).color(ctx.scheme.text_secondary))
            .into();
    }

    for &post in posts {
        let mut card = Column::new().spacing(spacing::XXS).push(
            button(Text::new(post.title()).size(typography::TITLE_MD).font(bold()))
                .padding(0)
                .on_press(Message::OpenPost(post.slug.clone()))
                .style(styles::button::link(ctx.scheme)),
        );
        if !post.date().is_empty() {
            card = card.push(
                Text::new(post.date())
                    .size(typography::CAPTION)
                    .color(ctx.scheme.text_secondary),
            );
        }
        if let Some(blurb) = post.blurb() {
            card = card.push(
                Text::new(blurb)
                    .size(typography::BODY)
                    .color(ctx.scheme.text_secondary),
            );
        }
        column = column.push(
            Container::new(card)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::card(ctx.scheme)),
        );
    }

    column.into()
}

/// A single post: tags, title, summary, date and reading time, then the body.
pub fn post<'a>(ctx: ViewContext<'a>, post: &'a Post) -> Element<'a, Message> {
    let back = button(Text::new(ctx.i18n.tr("blog-back")).size(typography::CAPTION))
        .on_press(Message::BackToIndex)
        .style(styles::button::link(ctx.scheme));

    let mut header = Column::new().spacing(spacing::XS);

    if !post.tags().is_empty() {
        let mut tags = Row::new().spacing(spacing::XS);
        for tag in post.tags() {
            tags = tags.push(
                Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tag(ctx.scheme)),
            );
        }
        header = header.push(tags);
    }

    header = header.push(Text::new(post.title()).size(typography::DISPLAY).font(bold()));

    if let Some(summary) = post.front_matter.summary.as_deref() {
        header = header.push(
            Text::new(summary)
                .size(typography::TITLE_MD)
                .color(ctx.scheme.text_secondary),
        );
    }

    let mut meta = Vec::new();
    if !post.date().is_empty() {
        meta.push(ctx.i18n.format_date(post.date()));
    }
    if let Some(minutes) = post.front_matter.reading_time {
        meta.push(
            ctx.i18n
                .tr_with_args("blog-reading-time", &[("minutes", &minutes.to_string())]),
        );
    }
    if !meta.is_empty() {
        header = header.push(
            Text::new(meta.join(" · "))
                .size(typography::CAPTION)
                .color(ctx.scheme.text_secondary),
        );
    }

    let article = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(Text::new(post.body.as_str()).size(typography::BODY));

    Column::new()
        .spacing(spacing::MD)
        .push(back)
        .push(
            Container::new(article)
                .padding(spacing::XL)
                .width(Length::Fill)
                .style(styles::container::card(ctx.scheme)),
        )
        .into()
}
