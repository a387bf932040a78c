// SPDX-License-Identifier: MPL-2.0
//! Bilingual blog content and its cross-language lookup tables.
//!
//! A post is stored once per language as `<fileBase>.<lang>.mdx`. The
//! `fileBase` ties translations together; each translation may pick its own
//! `slug` in front matter (defaulting to the `fileBase`). The index is built
//! once from the full content set and is read-only afterwards.

pub mod scanner;

pub use scanner::{scan_content_dir, split_front_matter};

use crate::locale::LanguageCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CONTENT_EXTENSION: &str = "mdx";

/// Author-supplied metadata from a post's front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover: Option<String>,
    pub reading_time: Option<u32>,
    pub draft: Option<bool>,
}

/// One content file as handed over by a loader.
#[derive(Debug, Clone)]
pub struct ContentEntry {
    pub path: PathBuf,
    pub front_matter: FrontMatter,
    pub body: String,
}

/// A post in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub file_base: String,
    pub lang: LanguageCode,
    pub slug: String,
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Post {
    #[must_use]
    pub fn title(&self) -> &str {
        self.front_matter.title.as_deref().unwrap_or("Untitled")
    }

    #[must_use]
    pub fn date(&self) -> &str {
        self.front_matter.date.as_deref().unwrap_or("")
    }

    /// Text for listings: the summary when present, else the excerpt.
    #[must_use]
    pub fn blurb(&self) -> Option<&str> {
        self.front_matter
            .summary
            .as_deref()
            .or(self.front_matter.excerpt.as_deref())
            .filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.front_matter.tags.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.front_matter.draft.unwrap_or(false)
    }
}

/// Outcome of looking up a post for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostResolution<'a> {
    Found(&'a Post),
    /// The content exists in the requested language under another slug.
    Redirect(&'a str),
    /// Nothing to show; callers send the reader to the blog index.
    NotFound,
}

/// Key of the post map: `"{slug}__{lang}"`.
#[must_use]
pub fn post_key(slug: &str, lang: LanguageCode) -> String {
    format!("{slug}__{lang}")
}

/// Extracts `(fileBase, lang)` from a path ending in `<fileBase>.<fr|en>.mdx`.
#[must_use]
pub fn parse_content_path(path: &Path) -> Option<(String, LanguageCode)> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(CONTENT_EXTENSION)?.strip_suffix('.')?;
    let (file_base, lang) = stem.rsplit_once('.')?;
    if file_base.is_empty() {
        return None;
    }
    Some((file_base.to_string(), LanguageCode::from_code(lang)?))
}

#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    posts: HashMap<String, Post>,
    file_base_to_slug: HashMap<String, HashMap<LanguageCode, String>>,
    slug_to_file_base: HashMap<String, String>,
}

impl ContentIndex {
    /// Builds the lookup tables from every entry whose path names a content file.
    ///
    /// Entries are processed in path order; when two files claim the same
    /// `(fileBase, lang)` or the same slug, the later one wins. A post that
    /// loses its slug to another `fileBase` is also dropped from its own
    /// translation table, so no translation links to the wrong post.
    pub fn build(entries: impl IntoIterator<Item = ContentEntry>) -> Self {
        let mut entries: Vec<ContentEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        let mut index = Self::default();
        for entry in entries {
            let Some((file_base, lang)) = parse_content_path(&entry.path) else {
                tracing::debug!(path = %entry.path.display(), "not a content file; skipped");
                continue;
            };
            let slug = entry
                .front_matter
                .slug
                .clone()
                .filter(|slug| !slug.is_empty())
                .unwrap_or_else(|| file_base.clone());

            let previous = index
                .file_base_to_slug
                .entry(file_base.clone())
                .or_default()
                .insert(lang, slug.clone());
            if let Some(previous) = previous {
                tracing::warn!(%file_base, %lang, %previous, "duplicate translation; keeping the later file");
                index.posts.remove(&post_key(&previous, lang));
            }
            if let Some(owner) = index
                .slug_to_file_base
                .insert(slug.clone(), file_base.clone())
                .filter(|owner| *owner != file_base)
            {
                tracing::warn!(%slug, %owner, %file_base, "slug claimed by two posts; keeping the later file");
                if let Some(post) = index.posts.get(&post_key(&slug, lang)) {
                    if let Some(slugs) = index.file_base_to_slug.get_mut(&post.file_base) {
                        slugs.remove(&lang);
                    }
                }
            }
            index.posts.insert(
                post_key(&slug, lang),
                Post {
                    file_base,
                    lang,
                    slug,
                    front_matter: entry.front_matter,
                    body: entry.body,
                },
            );
        }
        index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn get(&self, slug: &str, lang: LanguageCode) -> Option<&Post> {
        self.posts.get(&post_key(slug, lang))
    }

    /// Per-language slugs registered for a `fileBase`.
    #[must_use]
    pub fn slugs_for(&self, file_base: &str) -> Option<&HashMap<LanguageCode, String>> {
        self.file_base_to_slug.get(file_base)
    }

    #[must_use]
    pub fn file_base_of(&self, slug: &str) -> Option<&str> {
        self.slug_to_file_base.get(slug).map(String::as_str)
    }

    /// Slug of the same content in `target`, or `None` if the slug is unknown
    /// or the content has no `target` translation.
    #[must_use]
    pub fn resolve_slug_across_languages(&self, slug: &str, target: LanguageCode) -> Option<&str> {
        let file_base = self.slug_to_file_base.get(slug)?;
        self.file_base_to_slug
            .get(file_base)?
            .get(&target)
            .map(String::as_str)
    }

    /// Decides what the post page shows for `slug` in `lang`.
    #[must_use]
    pub fn resolve_post(&self, slug: &str, lang: LanguageCode) -> PostResolution<'_> {
        if let Some(post) = self.get(slug, lang) {
            return PostResolution::Found(post);
        }
        match self.resolve_slug_across_languages(slug, lang) {
            Some(translated) => PostResolution::Redirect(translated),
            None => PostResolution::NotFound,
        }
    }

    /// Published posts in `lang`, newest first.
    #[must_use]
    pub fn posts_for(&self, lang: LanguageCode) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .values()
            .filter(|post| post.lang == lang && !post.is_draft())
            .collect();
        posts.sort_by(|a, b| b.date().cmp(a.date()).then_with(|| a.slug.cmp(&b.slug)));
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, slug: Option<&str>, date: &str) -> ContentEntry {
        ContentEntry {
            path: PathBuf::from(path),
            front_matter: FrontMatter {
                slug: slug.map(str::to_string),
                title: Some(format!("Title of {path}")),
                date: Some(date.to_string()),
                ..FrontMatter::default()
            },
            body: String::new(),
        }
    }

    fn sample_index() -> ContentIndex {
        ContentIndex::build([
            entry("/content/blog/2025-02/greeting.fr.mdx", Some("bonjour"), "2025-02-10"),
            entry("/content/blog/2025-02/greeting.en.mdx", Some("hello"), "2025-02-10"),
            entry("/content/blog/2025-03/only-fr.fr.mdx", None, "2025-03-01"),
            entry("/content/blog/2025-01/rust.en.mdx", None, "2025-01-05"),
        ])
    }

    #[test]
    fn parses_content_paths() {
        assert_eq!(
            parse_content_path(Path::new("content/blog/2025-02/mon-post.fr.mdx")),
            Some(("mon-post".to_string(), LanguageCode::Fr))
        );
        assert_eq!(
            parse_content_path(Path::new("/a/b.c.en.mdx")),
            Some(("b.c".to_string(), LanguageCode::En))
        );
        assert_eq!(parse_content_path(Path::new("/a/post.de.mdx")), None);
        assert_eq!(parse_content_path(Path::new("/a/post.fr.md")), None);
        assert_eq!(parse_content_path(Path::new("/a/.fr.mdx")), None);
        assert_eq!(parse_content_path(Path::new("/a/post.mdx")), None);
    }

    #[test]
    fn slugs_map_across_languages() {
        let index = sample_index();
        assert_eq!(
            index.resolve_slug_across_languages("bonjour", LanguageCode::En),
            Some("hello")
        );
        assert_eq!(
            index.resolve_slug_across_languages("hello", LanguageCode::Fr),
            Some("bonjour")
        );
        assert_eq!(index.resolve_slug_across_languages("unknown", LanguageCode::En), None);
        assert_eq!(index.resolve_slug_across_languages("only-fr", LanguageCode::En), None);
    }

    #[test]
    fn slug_defaults_to_file_base() {
        let index = sample_index();
        let post = index.get("only-fr", LanguageCode::Fr).expect("post by file base");
        assert_eq!(post.file_base, "only-fr");
        assert_eq!(index.file_base_of("bonjour"), Some("greeting"));
    }

    #[test]
    fn posts_are_keyed_by_slug_and_language() {
        let index = sample_index();
        assert_eq!(post_key("hello", LanguageCode::En), "hello__en");
        assert!(index.get("hello", LanguageCode::En).is_some());
        assert!(index.get("hello", LanguageCode::Fr).is_none());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn resolve_post_redirects_or_reports_missing() {
        let index = sample_index();
        assert!(matches!(
            index.resolve_post("hello", LanguageCode::En),
            PostResolution::Found(post) if post.slug == "hello"
        ));
        assert_eq!(
            index.resolve_post("hello", LanguageCode::Fr),
            PostResolution::Redirect("bonjour")
        );
        assert_eq!(index.resolve_post("rust", LanguageCode::Fr), PostResolution::NotFound);
        assert_eq!(index.resolve_post("nope", LanguageCode::Fr), PostResolution::NotFound);
    }

    #[test]
    fn listing_is_per_language_newest_first() {
        let index = sample_index();
        let fr: Vec<&str> = index
            .posts_for(LanguageCode::Fr)
            .iter()
            .map(|post| post.slug.as_str())
            .collect();
        assert_eq!(fr, ["only-fr", "bonjour"]);

        let en: Vec<&str> = index
            .posts_for(LanguageCode::En)
            .iter()
            .map(|post| post.slug.as_str())
            .collect();
        assert_eq!(en, ["hello", "rust"]);
    }

    #[test]
    fn drafts_are_hidden_from_listings_but_resolvable() {
        let mut draft = entry("/c/wip.en.mdx", None, "2030-01-01");
        draft.front_matter.draft = Some(true);
        let index = ContentIndex::build([draft]);

        assert!(index.posts_for(LanguageCode::En).is_empty());
        assert!(matches!(
            index.resolve_post("wip", LanguageCode::En),
            PostResolution::Found(_)
        ));
    }

    #[test]
    fn duplicate_translation_keeps_later_file() {
        let index = ContentIndex::build([
            entry("/c/2025-01/post.fr.mdx", Some("ancien"), "2025-01-01"),
            entry("/c/2025-02/post.fr.mdx", Some("nouveau"), "2025-02-01"),
        ]);
        let slugs = index.slugs_for("post").expect("file base registered");
        assert_eq!(slugs.len(), 1);
        assert_eq!(slugs.get(&LanguageCode::Fr).map(String::as_str), Some("nouveau"));
        assert!(index.get("ancien", LanguageCode::Fr).is_none());
    }

    #[test]
    fn shared_slug_unlinks_the_earlier_post() {
        let index = ContentIndex::build([
            entry("/c/a/alpha.fr.mdx", Some("k"), "2025-01-01"),
            entry("/c/a/alpha.en.mdx", Some("alpha-en"), "2025-01-01"),
            entry("/c/b/beta.fr.mdx", Some("k"), "2025-02-01"),
        ]);

        let post = index.get("k", LanguageCode::Fr).expect("later post kept");
        assert_eq!(post.file_base, "beta");
        assert_eq!(index.file_base_of("k"), Some("beta"));
        assert_eq!(
            index.resolve_slug_across_languages("alpha-en", LanguageCode::Fr),
            None
        );
        assert_eq!(
            index.resolve_slug_across_languages("k", LanguageCode::En),
            None
        );
        assert!(index.get("alpha-en", LanguageCode::En).is_some());
    }

    #[test]
    fn post_display_defaults() {
        let index = ContentIndex::build([ContentEntry {
            path: PathBuf::from("/c/bare.en.mdx"),
            front_matter: FrontMatter {
                excerpt: Some("Short".into()),
                ..FrontMatter::default()
            },
            body: String::new(),
        }]);
        let post = index.get("bare", LanguageCode::En).expect("post");
        assert_eq!(post.title(), "Untitled");
        assert_eq!(post.date(), "");
        assert_eq!(post.blurb(), Some("Short"));
        assert!(post.tags().is_empty());
    }
}
