//! Key-value persistence abstraction.
//!
//! Persisted state (history, theme, toggles, coffee stats) goes through
//! [`KeyValueStore`]. Reads and writes are best-effort: [`load_json`] and
//! [`save_json`] log failures and degrade to defaults instead of propagating.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;

/// String-keyed string store (e.g. browser localStorage).
pub trait KeyValueStore: Send + Sync {
    /// Reads `key`; `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and decodes a JSON value, falling back to `None` on any failure.
///
/// A missing key is silent; unreadable or corrupt entries are logged.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("{e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(source) => {
            log::warn!(
                "{}",
                StorageError::Serialize {
                    key: key.to_string(),
                    source,
                }
            );
            None
        }
    }
}

/// Like [`load_json`] with an explicit default.
pub fn load_json_or<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    load_json(store, key).unwrap_or(default)
}

/// Encodes and writes a JSON value. Failures are logged and dropped.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })
        .and_then(|json| store.set(key, &json));

    if let Err(e) = result {
        log::warn!("{e}");
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Process-local store used in tests and when no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for `key`, bypassing JSON decoding.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        save_json(&store, "k", &vec!["a", "b"]);
        assert_eq!(store.raw("k").as_deref(), Some(r#"["a","b"]"#));
        assert_eq!(
            load_json::<Vec<String>>(&store, "k"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<bool>(&store, "missing"), None);
        assert!(load_json_or(&store, "missing", true));
    }

    #[test]
    fn test_corrupt_value_falls_back() {
        let store = MemoryStore::new();
        store.set("speed", "not json").unwrap();
        assert_eq!(load_json_or(&store, "speed", 300u32), 300);
    }

    #[test]
    fn test_broken_store_is_tolerated() {
        save_json(&BrokenStore, "k", &1);
        assert_eq!(load_json::<u32>(&BrokenStore, "k"), None);
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("k", "1").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
