// SPDX-License-Identifier: MPL-2.0
//! Shared observable values with publish/subscribe semantics.
//!
//! An [`Observable`] has one logical writer and any number of passive
//! readers. Readers either register a callback with [`Observable::subscribe`]
//! (push) or hold a [`Watcher`] and ask it whether the value moved since they
//! last looked (pull, used by per-frame consumers).
//!
//! The new value is committed before any callback runs, so a listener that
//! reads the observable (or anything written before `set`) during
//! notification always sees the updated state. A panicking listener is
//! logged and skipped; it cannot fail the write or starve other listeners.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Slot<T> {
    value: T,
    version: u64,
}

struct Shared<T> {
    slot: RwLock<Slot<T>>,
    listeners: Mutex<Vec<(ListenerId, Listener<T>)>>,
    next_id: AtomicU64,
}

/// A value shared by reference between its owner and its observers.
///
/// Cloning an `Observable` yields another handle to the same value.
pub struct Observable<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.shared.slot.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Observable")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: RwLock::new(Slot { value, version: 0 }),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.shared
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .value
            .clone()
    }

    /// Number of writes since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.shared
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .version
    }

    /// Replaces the value, then notifies every listener with the new value.
    ///
    /// Writes of an equal value still bump the version and notify.
    pub fn set(&self, value: T) {
        {
            let mut slot = self
                .shared
                .slot
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            slot.value = value.clone();
            slot.version += 1;
        }

        // Snapshot so listeners may subscribe/unsubscribe from inside a callback.
        let listeners: Vec<(ListenerId, Listener<T>)> = self
            .shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for (id, listener) in listeners {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener(&value)));
            if outcome.is_err() {
                tracing::warn!(listener = id.0, "observable listener panicked; skipped");
            }
        }
    }

    /// Registers a callback invoked after every [`set`](Self::set).
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = ListenerId(self.shared.next_id.fetch_add(1, Ordering::Relaxed));
        self.shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self
            .shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Creates a pull-style reader positioned at the current version.
    #[must_use]
    pub fn watch(&self) -> Watcher<T> {
        Watcher {
            seen: self.version(),
            source: self.clone(),
        }
    }
}

/// Pull-style reader of an [`Observable`]; dropping it detaches it.
pub struct Watcher<T> {
    source: Observable<T>,
    seen: u64,
}

impl<T: fmt::Debug> fmt::Debug for Watcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watcher")
            .field("source", &self.source)
            .field("seen", &self.seen)
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> Watcher<T> {
    /// Current value of the source, without marking it seen.
    #[must_use]
    pub fn current(&self) -> T {
        self.source.get()
    }

    /// Returns the value if it was written since the last call, marking it seen.
    pub fn changed(&mut self) -> Option<T> {
        let version = self.source.version();
        if version == self.seen {
            return None;
        }
        self.seen = version;
        Some(self.source.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn set_updates_value_and_version() {
        let value = Observable::new(1);
        value.set(2);
        assert_eq!(value.get(), 2);
        assert_eq!(value.version(), 1);
    }

    #[test]
    fn clones_share_the_same_value() {
        let a = Observable::new("fr".to_string());
        let b = a.clone();
        b.set("en".to_string());
        assert_eq!(a.get(), "en");
    }

    #[test]
    fn listeners_observe_committed_value() {
        let value = Observable::new(0);
        let reader = value.clone();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_listener = Arc::clone(&seen);
        value.subscribe(move |v| {
            // The slot must already hold the broadcast value.
            assert_eq!(reader.get(), *v);
            seen_in_listener.store(*v, Ordering::SeqCst);
        });

        value.set(7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn panicking_listener_does_not_block_others() {
        let value = Observable::new(0);
        let hits = Arc::new(AtomicUsize::new(0));
        value.subscribe(|_| panic!("listener failure"));
        let counter = Arc::clone(&hits);
        value.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        value.set(1);
        assert_eq!(value.get(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let value = Observable::new(0);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let id = value.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        value.set(1);
        assert!(value.unsubscribe(id));
        assert!(!value.unsubscribe(id));
        value.set(2);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(value.listener_count(), 0);
    }

    #[test]
    fn watcher_reports_each_change_once() {
        let value = Observable::new(0);
        let mut watcher = value.watch();
        assert_eq!(watcher.changed(), None);

        value.set(3);
        value.set(4);
        assert_eq!(watcher.changed(), Some(4));
        assert_eq!(watcher.changed(), None);
        assert_eq!(watcher.current(), 4);
    }

    #[test]
    fn equal_writes_still_notify() {
        let value = Observable::new(5);
        let mut watcher = value.watch();
        value.set(5);
        assert_eq!(watcher.changed(), Some(5));
    }
}
