// SPDX-License-Identifier: MPL-2.0
//! Home page: hero, about cards, projects and tech stack.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    font,
    widget::{Column, Container, Row, Text},
    Element, Font, Length,
};

/// Label and text keys of the about cards, in display order.
const ABOUT_CARDS: [(&str, &str); 4] = [
    ("about-experience-label", "about-experience-text"),
    ("about-expertise-label", "about-expertise-text"),
    ("about-languages-label", "about-languages-text"),
    ("about-approach-label", "about-approach-text"),
];

/// Tech categories: title key and items (product names are not translated).
const TECH_STACK: [(&str, &[&str]); 5] = [
    ("tech-frameworks", &["React", "Next.js", "NestJS"]),
    ("tech-languages", &["TypeScript", "JavaScript", "Go", "Rust"]),
    ("tech-runtime", &["Node.js"]),
    ("tech-database", &["PostgreSQL"]),
    ("tech-devops", &["Docker", "Vercel", "GCP", "AWS"]),
];

/// A showcased project: name, repository address and tech pills.
struct Project {
    title: &'static str,
    url: &'static str,
    techs: &'static [&'static str],
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "Orcrux",
        url: "github.com/polymorphl/orcrux",
        techs: &["Go", "TypeScript"],
    },
    Project {
        title: "Go-kv",
        url: "github.com/polymorphl/go-kv",
        techs: &["Go"],
    },
    Project {
        title: "My Open Claude",
        url: "github.com/polymorphl/my-open-claude",
        techs: &["Rust"],
    },
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    let hero = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::DISPLAY).font(bold))
        .push(
            Text::new(ctx.i18n.tr("hero-tagline"))
                .size(typography::TITLE_MD)
                .color(ctx.scheme.text_secondary),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-status"))
                .size(typography::CAPTION)
                .color(ctx.scheme.accent),
        );

    let mut cards = Column::new().spacing(spacing::SM);
    for pair in ABOUT_CARDS.chunks(2) {
        let mut row = Row::new().spacing(spacing::SM);
        for (label_key, text_key) in pair {
            let card = Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr(label_key).to_uppercase())
                        .size(typography::CAPTION)
                        .color(ctx.scheme.accent),
                )
                .push(
                    Text::new(ctx.i18n.tr(text_key))
                        .size(typography::BODY)
                        .color(ctx.scheme.text_secondary),
                );
            row = row.push(
                Container::new(card)
                    .padding(spacing::MD)
                    .width(Length::FillPortion(1))
                    .style(styles::container::card(ctx.scheme)),
            );
        }
        cards = cards.push(row);
    }

    let about = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("section-about")).size(typography::TITLE_LG).font(bold))
        .push(cards);

    let mut categories = Column::new().spacing(spacing::MD);
    for (title_key, items) in TECH_STACK {
        let mut pills = Row::new().spacing(spacing::XS);
        for item in items {
            pills = pills.push(
                Container::new(Text::new(*item).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tag(ctx.scheme)),
            );
        }
        categories = categories.push(
            Column::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(ctx.i18n.tr(title_key).to_uppercase())
                        .size(typography::CAPTION)
                        .color(ctx.scheme.text_secondary),
                )
                .push(pills),
        );
    }

    let tech = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("tech-title")).size(typography::TITLE_LG).font(bold))
        .push(categories);

    let mut project_cards = Row::new().spacing(spacing::SM);
    for project in &PROJECTS {
        let mut pills = Row::new().spacing(spacing::XXS);
        for tech in project.techs {
            pills = pills.push(
                Container::new(Text::new(*tech).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tag(ctx.scheme)),
            );
        }
        let card = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(project.title).size(typography::TITLE_MD).font(bold))
            .push(
                Text::new(project.url)
                    .size(typography::CAPTION)
                    .color(ctx.scheme.text_secondary),
            )
            .push(pills);
        project_cards = project_cards.push(
            Container::new(card)
                .padding(spacing::MD)
                .width(Length::FillPortion(1))
                .style(styles::container::card(ctx.scheme)),
        );
    }

    let projects = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("projects-title")).size(typography::TITLE_LG).font(bold))
        .push(project_cards);

    let footer = Text::new(ctx.i18n.tr("footer-text"))
        .size(typography::CAPTION)
        .color(ctx.scheme.text_secondary);

    Column::new()
        .spacing(spacing::XL)
        .push(hero)
        .push(about)
        .push(projects)
        .push(tech)
        .push(footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_have_tech_pills() {
        for project in &PROJECTS {
            assert!(!project.techs.is_empty(), "{} has no techs", project.title);
            assert!(project.url.ends_with(&project.title.to_lowercase().replace(' ', "-")));
        }
    }

    #[test]
    fn home_section_titles_are_translated() {
        for lang in crate::locale::LanguageCode::ALL {
            let i18n = I18n::new(lang);
            for key in ["projects-title", "section-about", "tech-title"] {
                assert!(!i18n.tr(key).starts_with("MISSING:"), "{key} missing for {lang}");
            }
        }
    }
}
