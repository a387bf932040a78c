// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: brand, page links, language picker and theme toggle.

use crate::i18n::I18n;
use crate::locale::routing::Route;
use crate::locale::LanguageCode;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::Vertical,
    font,
    widget::{button, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub theme: ThemeMode,
    pub language: LanguageCode,
    pub route: &'a Route,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GoHome,
    GoBlog,
    SelectLanguage(LanguageCode),
    ToggleTheme,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.i18n.tr("nav-brand"))
            .size(typography::TITLE_MD)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            }),
    )
    .on_press(Message::GoHome)
    .style(styles::button::link(ctx.scheme));

    let on_blog = matches!(ctx.route, Route::Blog | Route::BlogPost(_));
    let home_link = nav_link(ctx.i18n.tr("nav-home"), Message::GoHome, !on_blog, ctx.scheme);
    let blog_link = nav_link(ctx.i18n.tr("nav-blog"), Message::GoBlog, on_blog, ctx.scheme);

    let mut languages = Row::new().spacing(spacing::XXS);
    for lang in LanguageCode::ALL {
        languages = languages.push(
            button(Text::new(lang.as_str().to_uppercase()).size(typography::CAPTION))
                .on_press(Message::SelectLanguage(lang))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::pill(ctx.scheme, lang == ctx.language)),
        );
    }

    let toggle_key = if ctx.theme.is_dark() {
        "theme-toggle-to-light"
    } else {
        "theme-toggle-to-dark"
    };
    let theme_toggle = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::CAPTION))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::pill(ctx.scheme, false));

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(home_link)
        .push(blog_link)
        .push(languages)
        .push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .align_y(Vertical::Center)
        .style(styles::container::card(ctx.scheme))
        .into()
}

fn nav_link<'a>(
    label: String,
    message: Message,
    active: bool,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    let weight = if active {
        font::Weight::Semibold
    } else {
        font::Weight::Normal
    };
    button(Text::new(label).size(typography::BODY).font(Font {
        weight,
        ..Font::DEFAULT
    }))
    .on_press(message)
    .style(styles::button::link(scheme))
    .into()
}
