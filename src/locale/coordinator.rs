// SPDX-License-Identifier: MPL-2.0
//! Single source of truth for the active language.

use super::routing::{language_prefix, sync_path_to_language};
use super::{resolve_language, LanguageCode};
use crate::config::LANGUAGE_KEY;
use crate::document::Document;
use crate::observable::ListenerId;
use crate::preferences::PreferenceStore;
use std::fmt;
use std::sync::Arc;

/// Keeps persisted preference, document attributes and URL path in agreement
/// about the active language.
///
/// The active language lives in the document's language attribute; the
/// coordinator is its only writer.
pub struct LocaleCoordinator {
    store: Arc<dyn PreferenceStore>,
    document: Document,
}

impl fmt::Debug for LocaleCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCoordinator")
            .field("active", &self.active_language())
            .finish()
    }
}

impl LocaleCoordinator {
    /// Reads the persisted preference (normalizing it, writing the default if
    /// absent) and publishes it to the document.
    pub fn new(store: Arc<dyn PreferenceStore>, document: Document) -> Self {
        let stored = store.get(LANGUAGE_KEY);
        let initial = resolve_language(stored.as_deref());
        if stored.as_deref() != Some(initial.as_str()) {
            if let Err(error) = store.set(LANGUAGE_KEY, initial.as_str()) {
                tracing::warn!(%error, "failed to persist initial language");
            }
        }
        document.language().set(initial);
        tracing::debug!(language = %initial, "locale coordinator initialized");

        Self { store, document }
    }

    #[must_use]
    pub fn active_language(&self) -> LanguageCode {
        self.document.language().get()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Persists `lang`, updates the document, then broadcasts the change.
    ///
    /// Storage failures are logged and do not stop the update. Setting the
    /// current language again repeats the same writes and notification.
    pub fn set_language(&self, lang: LanguageCode) {
        if let Err(error) = self.store.set(LANGUAGE_KEY, lang.as_str()) {
            tracing::warn!(%error, language = %lang, "failed to persist language");
        }
        // The document write is also the broadcast: listeners run after commit.
        self.document.language().set(lang);
        tracing::debug!(language = %lang, "language changed");
    }

    /// Adopts the language named by the first path segment, if any.
    ///
    /// Returns the language that was applied.
    pub fn sync_from_path(&self, path: &str) -> Option<LanguageCode> {
        let lang = language_prefix(path)?;
        self.set_language(lang);
        Some(lang)
    }

    /// Corrected path for the active language, or `None` if `current_path` is fine.
    #[must_use]
    pub fn sync_path(&self, current_path: &str) -> Option<String> {
        sync_path_to_language(current_path, self.active_language())
    }

    /// Subscribes to language-change notifications.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&LanguageCode) + Send + Sync + 'static,
    {
        self.document.language().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.document.language().unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DATA_LANG, LANG};
    use crate::error::{Error, Result};
    use crate::preferences::MemoryStore;
    use std::sync::Mutex;

    fn coordinator_with(values: &[(&str, &str)]) -> (LocaleCoordinator, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_values(values.iter().copied()));
        let coordinator = LocaleCoordinator::new(store.clone(), Document::default());
        (coordinator, store)
    }

    #[test]
    fn starts_from_persisted_language() {
        let (coordinator, _) = coordinator_with(&[(LANGUAGE_KEY, "en")]);
        assert_eq!(coordinator.active_language(), LanguageCode::En);
    }

    #[test]
    fn missing_preference_is_created_with_default() {
        let (coordinator, store) = coordinator_with(&[]);
        assert_eq!(coordinator.active_language(), LanguageCode::Fr);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn malformed_preference_is_normalized() {
        let (coordinator, store) = coordinator_with(&[(LANGUAGE_KEY, "en-GB")]);
        assert_eq!(coordinator.active_language(), LanguageCode::En);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn set_language_updates_storage_and_document() {
        let (coordinator, store) = coordinator_with(&[]);
        coordinator.set_language(LanguageCode::En);

        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
        assert_eq!(coordinator.document().attribute(LANG).as_deref(), Some("en"));
        assert_eq!(coordinator.document().attribute(DATA_LANG).as_deref(), Some("en"));
    }

    #[test]
    fn setting_same_language_keeps_final_state() {
        let (coordinator, store) = coordinator_with(&[(LANGUAGE_KEY, "fr")]);
        coordinator.set_language(LanguageCode::Fr);
        coordinator.set_language(LanguageCode::Fr);

        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("fr"));
        assert_eq!(coordinator.document().attribute(LANG).as_deref(), Some("fr"));
    }

    #[test]
    fn listeners_see_persisted_and_document_state() {
        let (coordinator, store) = coordinator_with(&[]);
        let observed = Arc::new(Mutex::new(Vec::new()));

        let document = coordinator.document().clone();
        let sink = Arc::clone(&observed);
        let store_view = Arc::clone(&store);
        coordinator.subscribe(move |lang| {
            let stored = store_view.get(LANGUAGE_KEY);
            let attr = document.attribute(LANG);
            sink.lock()
                .expect("observation lock")
                .push((*lang, stored, attr));
        });

        coordinator.set_language(LanguageCode::En);

        let observed = observed.lock().expect("observation lock");
        assert_eq!(
            observed.as_slice(),
            &[(
                LanguageCode::En,
                Some("en".to_string()),
                Some("en".to_string())
            )]
        );
    }

    #[test]
    fn sync_from_path_applies_prefix_only() {
        let (coordinator, _) = coordinator_with(&[]);

        assert_eq!(coordinator.sync_from_path("/en/blog/my-post"), Some(LanguageCode::En));
        assert_eq!(coordinator.active_language(), LanguageCode::En);

        assert_eq!(coordinator.sync_from_path("/blog/my-post"), None);
        assert_eq!(coordinator.sync_from_path("/"), None);
        assert_eq!(coordinator.active_language(), LanguageCode::En);
    }

    #[test]
    fn sync_path_uses_active_language() {
        let (coordinator, _) = coordinator_with(&[(LANGUAGE_KEY, "fr")]);
        assert_eq!(
            coordinator.sync_path("/en/blog/hello"),
            Some("/fr/blog/hello".to_string())
        );
        assert_eq!(coordinator.sync_path("/fr/blog/hello"), None);
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io("read-only".into()))
        }
    }

    #[test]
    fn storage_failure_does_not_block_language_change() {
        let coordinator = LocaleCoordinator::new(Arc::new(FailingStore), Document::default());
        coordinator.set_language(LanguageCode::En);
        assert_eq!(coordinator.active_language(), LanguageCode::En);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let (coordinator, _) = coordinator_with(&[]);
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = coordinator.subscribe(move |_| {
            *counter.lock().expect("counter lock") += 1;
        });
        assert!(coordinator.unsubscribe(id));
        coordinator.set_language(LanguageCode::En);
        assert_eq!(*calls.lock().expect("counter lock"), 0);
    }
}
