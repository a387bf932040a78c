// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of two layers: the aurora background, and the
//! navbar over a scrollable page column.

use super::Message;
use crate::content::{ContentIndex, PostResolution};
use crate::i18n::I18n;
use crate::locale::routing::Route;
use crate::locale::LanguageCode;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::{background, blog, home, navbar, styles};
use iced::widget::image::Handle;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: ThemeMode,
    pub language: LanguageCode,
    pub route: &'a Route,
    pub content: &'a ContentIndex,
    pub background: Option<&'a Handle>,
    /// Translation key of a startup notice, shown until dismissed.
    pub notice: Option<&'a str>,
}

/// Renders the current page over the background.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = ColorScheme::for_mode(ctx.theme);

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        scheme,
        theme: ctx.theme,
        language: ctx.language,
        route: ctx.route,
    })
    .map(Message::Navbar);

    let mut content = Column::new().spacing(spacing::LG);
    if let Some(key) = ctx.notice {
        content = content.push(view_notice(ctx.i18n, key, scheme));
    }
    content = content.push(view_page(&ctx, scheme));

    let page = Container::new(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::XL, spacing::LG]);

    let foreground = Column::new().push(navbar_view).push(
        Scrollable::new(
            Container::new(page)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .height(Length::Fill),
    );

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
    if let Some(handle) = ctx.background {
        layers = layers.push(background::view(handle));
    }
    layers = layers.push(foreground);

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(scheme))
        .into()
}

fn view_notice<'a>(i18n: &I18n, key: &str, scheme: ColorScheme) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("×").size(typography::BODY))
                .on_press(Message::DismissNotice)
                .style(styles::button::link(scheme)),
        );

    Container::new(row)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::card(scheme))
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, scheme: ColorScheme) -> Element<'a, Message> {
    let blog_ctx = blog::ViewContext {
        i18n: ctx.i18n,
        scheme,
    };
    match ctx.route {
        Route::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            scheme,
        }),
        Route::BlogPost(slug) => match ctx.content.resolve_post(slug, ctx.language) {
            PostResolution::Found(post) => blog::post(blog_ctx, post).map(Message::Blog),
            PostResolution::Redirect(_) | PostResolution::NotFound => {
                view_index(ctx, blog_ctx)
            }
        },
        Route::Blog => view_index(ctx, blog_ctx),
    }
}

fn view_index<'a>(ctx: &ViewContext<'a>, blog_ctx: blog::ViewContext<'a>) -> Element<'a, Message> {
    let posts = ctx.content.posts_for(ctx.language);
    blog::index(blog_ctx, &posts).map(Message::Blog)
}
