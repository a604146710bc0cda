use folio_shared::{
    storage::{KeyValueStore, StorageError},
    AnonymousUserId,
};
use web_sys::Storage;

/// `window.localStorage`, looked up on every call so a blocked storage
/// (private mode, disabled cookies) degrades to errors instead of panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// The visitor's anonymous id, minted from the clock and `Math.random` on
/// first use.
pub fn anonymous_user() -> AnonymousUserId {
    AnonymousUserId::load_or_create(&LocalStore, || {
        let now_ms = js_sys::Date::now() as u64;
        let entropy = (js_sys::Math::random() * 36f64.powi(9)) as u64;
        AnonymousUserId::generate(now_ms, entropy)
    })
}
