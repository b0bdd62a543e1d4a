//! `window.localStorage` adapter for the core's [`KeyValueStore`].

use termfolio_core::{KeyValueStore, StorageError};

use super::dom::local_storage;

/// Browser localStorage.
///
/// Zero-sized: the `Storage` handle is looked up on every call, so the type
/// stays `Send + Sync` even though `web_sys::Storage` is not.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    /// Whether the browser exposes localStorage at all (it may be disabled).
    pub fn is_available() -> bool {
        local_storage().is_some()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}
