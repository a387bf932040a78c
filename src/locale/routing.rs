// SPDX-License-Identifier: MPL-2.0
//! URL path handling: language prefixes and the route table.
//!
//! Recognized paths are `/`, `/blog`, `/blog/:slug`, and the
//! language-prefixed forms `/:lang/blog` and `/:lang/blog/:slug`.

use super::LanguageCode;

const BLOG_SEGMENT: &str = "blog";

/// Paths containing this marker live in the content area and carry a language prefix.
const CONTENT_AREA_MARKER: &str = "/blog";

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Blog,
    BlogPost(String),
}

impl Route {
    /// Parses a path, ignoring any language prefix.
    ///
    /// Returns `None` for paths outside the route table.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let segments = segments(strip_language_prefix(path));
        match segments.as_slice() {
            [] => Some(Route::Home),
            [BLOG_SEGMENT] => Some(Route::Blog),
            [BLOG_SEGMENT, slug] => Some(Route::BlogPost((*slug).to_string())),
            _ => None,
        }
    }

    /// Builds the path for this route, prefixed with `lang` when given.
    ///
    /// The home page is never prefixed.
    #[must_use]
    pub fn path(&self, lang: Option<LanguageCode>) -> String {
        let unprefixed = match self {
            Route::Home => return "/".to_string(),
            Route::Blog => format!("/{BLOG_SEGMENT}"),
            Route::BlogPost(slug) => format!("/{BLOG_SEGMENT}/{slug}"),
        };
        match lang {
            Some(lang) => format!("/{lang}{unprefixed}"),
            None => unprefixed,
        }
    }
}

/// Parsed view of a URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    /// Language segment, when the path starts with one.
    pub language: Option<LanguageCode>,
    /// Matched route, `None` when the path is outside the route table.
    pub route: Option<Route>,
}

impl RouteState {
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            language: language_prefix(path),
            route: Route::parse(path),
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Returns the language named by the first path segment, if it is an exact code.
#[must_use]
pub fn language_prefix(path: &str) -> Option<LanguageCode> {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .and_then(LanguageCode::from_code)
}

/// Removes a leading language segment, leaving the rest of the path untouched.
#[must_use]
pub fn strip_language_prefix(path: &str) -> &str {
    let trimmed = path.trim_start_matches('/');
    match language_prefix(path) {
        Some(lang) => {
            let rest = &trimmed[lang.as_str().len()..];
            if rest.is_empty() || rest.starts_with('/') {
                rest
            } else {
                path
            }
        }
        None => path,
    }
}

/// Computes the path that restores the prefix invariant for `lang`.
///
/// * path already prefixed with `lang` → `None`
/// * path prefixed with the other language → prefix replaced
/// * unprefixed path in the content area (contains `/blog`) → prefix added
/// * anything else (e.g. `/`) → `None`, left untouched
///
/// Applying the result and calling again always yields `None`.
#[must_use]
pub fn sync_path_to_language(path: &str, lang: LanguageCode) -> Option<String> {
    if !path.contains(CONTENT_AREA_MARKER) {
        return None;
    }

    let parts = segments(path);
    match parts.first().copied().and_then(LanguageCode::from_code) {
        Some(current) if current == lang => None,
        Some(_) => Some(format!("/{}/{}", lang, parts[1..].join("/"))),
        None => Some(format!("/{lang}{path}")),
    }
}
