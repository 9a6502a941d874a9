//! Key/value persistence behind the session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage`; tests and non-browser
//! builds use `MemoryStore`. Write failures (quota, private mode) are logged
//! and otherwise ignored: persistence is best effort.

use std::collections::HashMap;

/// Minimal string store with `localStorage` semantics.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set_item(key, value);
        store
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// `window.localStorage`, when available.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; session will not persist");
        }
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }

    fn remove_item(&mut self, key: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if storage.remove_item(key).is_err() {
            log::warn!("localStorage remove failed for {key}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("user"), None);
        store.set_item("user", "a");
        store.set_item("user", "b");
        assert_eq!(store.get_item("user").as_deref(), Some("b"));
        store.remove_item("user");
        assert_eq!(store.get_item("user"), None);
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut store = MemoryStore::with_item("other", "x");
        store.remove_item("user");
        assert_eq!(store.get_item("other").as_deref(), Some("x"));
    }
}
