//! Client-local key/value persistence.
//!
//! The browser implementation wraps `window.localStorage`; tests use
//! [`MemoryStore`].

use std::{cell::RefCell, collections::HashMap};

use thiserror::Error;

/// Key holding the anonymous user identifier.
pub const USER_ID_KEY: &str = "userId";
/// Key holding the light/dark preference.
pub const THEME_KEY: &str = "theme";

/// Local storage failure. Callers log it and carry on with in-memory state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage backend (private mode, disabled storage, non-browser host).
    #[error("local storage is unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, security error).
    #[error("local storage rejected `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

/// Minimal string key/value store.
pub trait KeyValueStore {
    /// Read `key`, `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore};

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::with_entry("theme", "dark");
        store.set("theme", "light").expect("set");
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("light"));
        assert_eq!(store.get("missing").expect("get"), None);
    }
}
