use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{KeyValueStore, USER_ID_KEY};

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque per-browser identifier used to scope one like per profile.
///
/// Minted lazily on first use, persisted under [`USER_ID_KEY`], never rotated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnonymousUserId(String);

impl AnonymousUserId {
    /// Wrap an existing identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build `user_<millis>_<9 base36 chars>` from a timestamp and entropy.
    pub fn generate(now_ms: u64, entropy: u64) -> Self {
        let mut suffix = [b'0'; SUFFIX_LEN];
        let mut rest = entropy;
        for slot in suffix.iter_mut().rev() {
            *slot = BASE36[(rest % 36) as usize];
            rest /= 36;
        }
        let suffix = String::from_utf8_lossy(&suffix);
        Self(format!("user_{now_ms}_{suffix}"))
    }

    /// Return the persisted id, or mint one with `mint` and persist it.
    ///
    /// A failing store still yields a usable id for this session.
    pub fn load_or_create<S, F>(store: &S, mint: F) -> Self
    where
        S: KeyValueStore + ?Sized,
        F: FnOnce() -> Self,
    {
        match store.get(USER_ID_KEY) {
            Ok(Some(existing)) if !existing.trim().is_empty() => return Self(existing),
            Ok(_) => {},
            Err(err) => warn!(error = %err, "failed to read anonymous user id"),
        }

        let fresh = mint();
        if let Err(err) = store.set(USER_ID_KEY, &fresh.0) {
            warn!(error = %err, "failed to persist anonymous user id");
        }
        fresh
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnonymousUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::AnonymousUserId;
    use crate::storage::{KeyValueStore, MemoryStore, StorageError, USER_ID_KEY};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn generated_id_has_fixed_shape() {
        let id = AnonymousUserId::generate(1_700_000_000_000, 35);
        assert_eq!(id.as_str(), "user_1700000000000_00000000z");

        let wide = AnonymousUserId::generate(1, u64::MAX);
        let suffix = wide.as_str().rsplit('_').next().expect("suffix");
        assert_eq!(suffix.len(), 9);
    }

    #[test]
    fn existing_id_is_reused_without_minting() {
        let store = MemoryStore::with_entry(USER_ID_KEY, "user_1_abc");
        let minted = Cell::new(false);
        let id = AnonymousUserId::load_or_create(&store, || {
            minted.set(true);
            AnonymousUserId::generate(2, 2)
        });
        assert_eq!(id.as_str(), "user_1_abc");
        assert!(!minted.get());
    }

    #[test]
    fn missing_id_is_minted_once_and_persisted() {
        let store = MemoryStore::new();
        let first = AnonymousUserId::load_or_create(&store, || AnonymousUserId::generate(5, 7));
        let second =
            AnonymousUserId::load_or_create(&store, || AnonymousUserId::generate(9, 9));
        assert_eq!(first, second);
        assert_eq!(store.get(USER_ID_KEY).expect("get").as_deref(), Some(first.as_str()));
    }

    #[test]
    fn broken_store_still_yields_an_id() {
        let id = AnonymousUserId::load_or_create(&BrokenStore, || AnonymousUserId::generate(3, 3));
        assert_eq!(id, AnonymousUserId::generate(3, 3));
    }
}
