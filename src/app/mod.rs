// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages and the
//! shared document state.
//!
//! The `App` struct wires together the domains (locale, theme, content,
//! background) and translates messages into state changes. The locale
//! coordinator and theme controller own the preferences; the app only reads
//! the document back, so every view agrees with what was persisted.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::aurora::{AuroraSimulator, Lifecycle};
use crate::config;
use crate::content::{self, ContentIndex};
use crate::document::Document;
use crate::i18n::I18n;
use crate::locale::routing::Route;
use crate::locale::{resolve_language, LanguageCode, LocaleCoordinator};
use crate::observable::Watcher;
use crate::preferences::{MemoryStore, PreferenceStore, SettingsStore};
use crate::ui::background;
use crate::ui::theming::{ThemeController, ThemeMode};
use iced::widget::image::Handle;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    document: Document,
    locale: LocaleCoordinator,
    theme: ThemeController,
    content: ContentIndex,
    /// Current URL-style path, always consistent with the active language.
    path: String,
    route: Route,
    aurora: AuroraSimulator,
    /// Last rasterized aurora frame.
    background: Option<Handle>,
    language_watcher: Watcher<LanguageCode>,
    /// Translation key of a startup warning, until the user dismisses it.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("path", &self.path)
            .field("route", &self.route)
            .field("language", &self.locale.active_language())
            .field("theme", &self.theme.mode())
            .field("posts", &self.content.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Opens `settings.toml`, or an in-memory store when no config directory exists.
///
/// Also returns the translation key of a load warning, if any.
fn open_preferences() -> (Arc<dyn PreferenceStore>, Option<String>) {
    match config::config_path_with_override(None) {
        Some(path) => {
            let (store, warning) = SettingsStore::open(path);
            if let Some(key) = &warning {
                tracing::warn!(%key, path = %store.path().display(), "preferences reset to defaults");
            }
            (Arc::new(store), warning)
        }
        None => {
            tracing::warn!("no config directory; preferences will not be saved");
            (Arc::new(MemoryStore::new()), None)
        }
    }
}

fn load_content() -> ContentIndex {
    let root = paths::get_content_dir();
    match content::scan_content_dir(&root) {
        Ok(index) => index,
        Err(error) => {
            tracing::warn!(root = %root.display(), %error, "blog content unavailable");
            ContentIndex::default()
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences, CLI flags
    /// and the content directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (store, notice) = open_preferences();
        let document = Document::default();
        let locale = LocaleCoordinator::new(Arc::clone(&store), document.clone());
        let theme = ThemeController::new(store, document.clone());

        if let Some(raw) = flags.lang.as_deref() {
            locale.set_language(resolve_language(Some(raw)));
        }
        if let Some(raw) = flags.theme.as_deref() {
            theme.set_theme(ThemeMode::from_str_lossy(Some(raw)));
        }

        let mut app = App {
            i18n: I18n::new(locale.active_language()),
            language_watcher: document.language().watch(),
            aurora: AuroraSimulator::new(document.theme()),
            document,
            locale,
            theme,
            content: load_content(),
            path: Route::Home.path(None),
            route: Route::Home,
            background: None,
            notice,
        };

        let start = flags.path.unwrap_or_else(|| Route::Home.path(None));
        app.with_context(|ctx| update::navigate(ctx, &start));
        app.sync_language();
        tracing::info!(path = %app.path, language = %app.locale.active_language(), "ready");

        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.route {
            Route::Home => self.i18n.tr("window-title"),
            Route::Blog => self.i18n.tr("window-title-blog"),
            Route::BlogPost(slug) => match self.content.get(slug, self.locale.active_language()) {
                Some(post) => self
                    .i18n
                    .tr_with_args("window-title-post", &[("title", post.title())]),
                None => self.i18n.tr("window-title-blog"),
            },
        }
    }

    fn theme(&self) -> Theme {
        match self.document.theme().get() {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.aurora.is_running());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                self.with_context(|ctx| update::handle_navbar_message(ctx, navbar_message));
            }
            Message::Blog(blog_message) => {
                self.with_context(|ctx| update::handle_blog_message(ctx, blog_message));
            }
            Message::WindowOpened(size) => {
                self.aurora.mount(size);
                self.refresh_background();
            }
            Message::WindowResized(size) => {
                if self.aurora.lifecycle() == Lifecycle::Uninitialized {
                    self.aurora.mount(size);
                    self.refresh_background();
                } else {
                    self.aurora.on_resize(size, Instant::now());
                }
            }
            Message::WindowClosed => {
                self.aurora.dispose();
                self.background = None;
            }
            Message::Tick(now) => {
                self.aurora.tick(now);
                self.refresh_background();
            }
            Message::DismissNotice => {
                self.notice = None;
            }
        }

        self.sync_language();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: self.document.theme().get(),
            language: self.locale.active_language(),
            route: &self.route,
            content: &self.content,
            background: self.background.as_ref(),
            notice: self.notice.as_deref(),
        })
    }

    fn with_context<F>(&mut self, handler: F)
    where
        F: FnOnce(&mut update::UpdateContext<'_>),
    {
        let mut ctx = update::UpdateContext {
            locale: &self.locale,
            theme: &self.theme,
            content: &self.content,
            path: &mut self.path,
            route: &mut self.route,
        };
        handler(&mut ctx);
    }

    /// Follows the document language in the interface text.
    fn sync_language(&mut self) {
        if let Some(lang) = self.language_watcher.changed() {
            self.i18n.set_language(lang);
        }
    }

    fn refresh_background(&mut self) {
        self.background = self
            .aurora
            .frame_plan()
            .and_then(|plan| background::render(&plan));
    }
}
