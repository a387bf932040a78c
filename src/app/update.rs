// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Navigation is the interesting part: every path change goes through
//! [`navigate`], which keeps the language prefix, the active language and
//! the post slug consistent before a page is shown.

use crate::content::{ContentIndex, PostResolution};
use crate::locale::routing::Route;
use crate::locale::{LanguageCode, LocaleCoordinator};
use crate::ui::theming::ThemeController;
use crate::ui::{blog, navbar};

/// Upper bound on consecutive rewrites of a single navigation.
///
/// A navigation settles in at most three steps (prefix fix, slug
/// translation, fallback to the index); the bound only guards against a
/// content set that would make rewrites cycle.
const MAX_REWRITES: usize = 8;

/// Mutable view of the application state needed by handlers.
pub struct UpdateContext<'a> {
    pub locale: &'a LocaleCoordinator,
    pub theme: &'a ThemeController,
    pub content: &'a ContentIndex,
    pub path: &'a mut String,
    pub route: &'a mut Route,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) {
    match message {
        navbar::Message::GoHome => navigate(ctx, &Route::Home.path(None)),
        navbar::Message::GoBlog => navigate(ctx, &Route::Blog.path(None)),
        navbar::Message::SelectLanguage(lang) => select_language(ctx, lang),
        navbar::Message::ToggleTheme => {
            ctx.theme.toggle_theme();
        }
    }
}

pub fn handle_blog_message(ctx: &mut UpdateContext<'_>, message: blog::Message) {
    match message {
        blog::Message::OpenPost(slug) => navigate(ctx, &Route::BlogPost(slug).path(None)),
        blog::Message::BackToIndex => navigate(ctx, &Route::Blog.path(None)),
    }
}

/// Switches language, then moves the current page to its counterpart.
pub fn select_language(ctx: &mut UpdateContext<'_>, lang: LanguageCode) {
    ctx.locale.set_language(lang);
    let target = ctx
        .locale
        .sync_path(ctx.path.as_str())
        .unwrap_or_else(|| ctx.path.clone());
    navigate(ctx, &target);
}

/// Navigates to `target`, rewriting it until it is consistent.
///
/// A language prefix in the path wins over the active language. Unprefixed
/// blog paths gain the active prefix. A post missing in the active language
/// redirects to its translation, or to the blog index when there is none.
/// Paths outside the route table land on the home page.
pub fn navigate(ctx: &mut UpdateContext<'_>, target: &str) {
    let mut path = normalize_path(target);

    for _ in 0..MAX_REWRITES {
        ctx.locale.sync_from_path(&path);
        if let Some(corrected) = ctx.locale.sync_path(&path) {
            tracing::debug!(from = %path, to = %corrected, "language prefix rewritten");
            path = corrected;
            continue;
        }

        let lang = ctx.locale.active_language();
        let route = match Route::parse(&path) {
            Some(route) => route,
            None => {
                tracing::debug!(%path, "unknown route; showing home");
                Route::Home
            }
        };

        if let Route::BlogPost(slug) = &route {
            match ctx.content.resolve_post(slug, lang) {
                PostResolution::Found(_) => {}
                PostResolution::Redirect(translated) => {
                    path = Route::BlogPost(translated.to_string()).path(Some(lang));
                    continue;
                }
                PostResolution::NotFound => {
                    path = Route::Blog.path(Some(lang));
                    continue;
                }
            }
        }

        if route == Route::Home {
            path = Route::Home.path(None);
        }
        *ctx.path = path;
        *ctx.route = route;
        return;
    }

    tracing::warn!(%target, "navigation did not settle; showing home");
    *ctx.path = Route::Home.path(None);
    *ctx.route = Route::Home;
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    let path = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LANGUAGE_KEY;
    use crate::content::{ContentEntry, FrontMatter};
    use crate::document::Document;
    use crate::preferences::{MemoryStore, PreferenceStore};
    use std::path::PathBuf;
    use std::sync::Arc;

    struct Harness {
        store: Arc<MemoryStore>,
        locale: LocaleCoordinator,
        theme: ThemeController,
        content: ContentIndex,
        path: String,
        route: Route,
    }

    impl Harness {
        fn new(language: &str) -> Self {
            let store = Arc::new(MemoryStore::with_values([(LANGUAGE_KEY, language)]));
            let document = Document::default();
            let locale = LocaleCoordinator::new(store.clone(), document.clone());
            let theme = ThemeController::new(store.clone(), document);
            let content = ContentIndex::build([
                post("/blog/2025-02/greeting.fr.mdx", "bonjour"),
                post("/blog/2025-02/greeting.en.mdx", "hello"),
                post("/blog/2025-03/notes.fr.mdx", "notes"),
            ]);
            Self {
                store,
                locale,
                theme,
                content,
                path: "/".to_string(),
                route: Route::Home,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                locale: &self.locale,
                theme: &self.theme,
                content: &self.content,
                path: &mut self.path,
                route: &mut self.route,
            }
        }
    }

    fn post(path: &str, slug: &str) -> ContentEntry {
        ContentEntry {
            path: PathBuf::from(path),
            front_matter: FrontMatter {
                slug: Some(slug.to_string()),
                ..FrontMatter::default()
            },
            body: String::new(),
        }
    }

    #[test]
    fn unprefixed_blog_path_gains_active_prefix() {
        let mut harness = Harness::new("fr");
        navigate(&mut harness.ctx(), "/blog");
        assert_eq!(harness.path, "/fr/blog");
        assert_eq!(harness.route, Route::Blog);
    }

    #[test]
    fn path_prefix_sets_active_language() {
        let mut harness = Harness::new("fr");
        navigate(&mut harness.ctx(), "/en/blog/hello");

        assert_eq!(harness.path, "/en/blog/hello");
        assert_eq!(harness.route, Route::BlogPost("hello".into()));
        assert_eq!(harness.locale.active_language(), LanguageCode::En);
        assert_eq!(harness.store.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn foreign_slug_redirects_to_translation() {
        let mut harness = Harness::new("en");
        navigate(&mut harness.ctx(), "/blog/bonjour");
        assert_eq!(harness.path, "/en/blog/hello");
        assert_eq!(harness.route, Route::BlogPost("hello".into()));
    }

    #[test]
    fn untranslated_post_falls_back_to_index() {
        let mut harness = Harness::new("en");
        navigate(&mut harness.ctx(), "/en/blog/notes");
        assert_eq!(harness.path, "/en/blog");
        assert_eq!(harness.route, Route::Blog);

        navigate(&mut harness.ctx(), "/en/blog/missing");
        assert_eq!(harness.route, Route::Blog);
    }

    #[test]
    fn switching_language_follows_the_post() {
        let mut harness = Harness::new("fr");
        navigate(&mut harness.ctx(), "/fr/blog/bonjour");

        select_language(&mut harness.ctx(), LanguageCode::En);
        assert_eq!(harness.path, "/en/blog/hello");
        assert_eq!(harness.locale.active_language(), LanguageCode::En);

        select_language(&mut harness.ctx(), LanguageCode::Fr);
        assert_eq!(harness.path, "/fr/blog/bonjour");
    }

    #[test]
    fn switching_language_on_home_keeps_root() {
        let mut harness = Harness::new("fr");
        select_language(&mut harness.ctx(), LanguageCode::En);
        assert_eq!(harness.path, "/");
        assert_eq!(harness.route, Route::Home);
        assert_eq!(harness.locale.active_language(), LanguageCode::En);
    }

    #[test]
    fn unknown_paths_show_home() {
        let mut harness = Harness::new("fr");
        navigate(&mut harness.ctx(), "/projects/42");
        assert_eq!(harness.path, "/");
        assert_eq!(harness.route, Route::Home);
    }

    #[test]
    fn paths_are_normalized() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("blog/"), "/blog");
        assert_eq!(normalize_path("/en/blog/hello?ref=rss#top"), "/en/blog/hello");
    }

    #[test]
    fn navbar_messages_drive_navigation_and_theme() {
        let mut harness = Harness::new("en");
        handle_navbar_message(&mut harness.ctx(), navbar::Message::GoBlog);
        assert_eq!(harness.path, "/en/blog");

        handle_blog_message(&mut harness.ctx(), blog::Message::OpenPost("hello".into()));
        assert_eq!(harness.path, "/en/blog/hello");

        handle_navbar_message(&mut harness.ctx(), navbar::Message::ToggleTheme);
        assert!(!harness.theme.mode().is_dark());

        handle_navbar_message(&mut harness.ctx(), navbar::Message::GoHome);
        assert_eq!(harness.route, Route::Home);
    }
}
