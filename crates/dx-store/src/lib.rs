//! Persisted UI state for dx.
//!
//! The credential selector remembers the last chosen project between page
//! loads. This crate decouples that from where the value actually lives:
//!
//! - [`StateStore`]: string key-value store
//! - [`StateStoreExt`]: typed helpers (`get_parsed` / `set_display`)
//!
//! # Implementations
//!
//! - [`NullStore`]: no-op (always empty), for `state.backend = "none"`
//! - [`MemoryStore`]: in-process map, for tests and embedding
//! - [`FileStore`]: one file per key under a directory
//!
//! # Example
//!
//! ```
//! use dx_store::{MemoryStore, StateStore, StateStoreExt};
//!
//! let store = MemoryStore::new();
//! store.set_display("dsnid", &42_u64);
//! assert_eq!(store.get_parsed::<u64>("dsnid"), Some(42));
//! ```

mod ext;
mod file;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub use ext::StateStoreExt;
pub use file::FileStore;

/// A persistent string key-value store.
///
/// Writes are best effort: a store that cannot persist a value logs the
/// failure and carries on, since losing a remembered selection only costs the
/// user one extra click.
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// No-op [`StateStore`].
///
/// Every `get` returns `None`; every `set` is silently discarded. Use when
/// persistence is disabled.
pub struct NullStore;

impl StateStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

/// In-memory [`StateStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(&key.into(), &value.into());
        store
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_store_always_empty() {
        let store = NullStore;
        assert_eq!(store.get("dsnid"), None);

        store.set("dsnid", "42");
        assert_eq!(store.get("dsnid"), None);
    }

    #[test]
    fn test_memory_store_set_and_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get("dsnid"), None);

        store.set("dsnid", "42");
        assert_eq!(store.get("dsnid"), Some("42".to_owned()));

        store.set("dsnid", "7");
        assert_eq!(store.get("dsnid"), Some("7".to_owned()));
    }

    #[test]
    fn test_memory_store_with_value() {
        let store = MemoryStore::with_value("dsnid", "3");
        assert_eq!(store.get("dsnid"), Some("3".to_owned()));
        assert_eq!(store.get("other"), None);
    }

    #[test]
    fn test_arc_store_shares_state() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let other = Arc::clone(&store);

        store.set("dsnid", "9");
        assert_eq!(other.get("dsnid"), Some("9".to_owned()));
    }
}
