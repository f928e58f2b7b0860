//! In-memory key-value store for testing and ephemeral use.
//!
//! [`InMemoryKeyValueStore`] keeps every value in a `HashMap` protected by a
//! `RwLock`. An optional quota caps the total bytes held, which lets tests
//! reproduce the "storage full" failures a real backend can report.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::keys::validate_key;
use crate::traits::KeyValueStore;

/// An in-memory implementation of [`KeyValueStore`].
///
/// Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once the stored values would exceed
    /// `limit` bytes in total.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total bytes across all stored values.
    pub fn total_bytes(&self) -> usize {
        self.values
            .read()
            .map(|v| v.values().map(String::len).sum())
            .unwrap_or(0)
    }

    /// Sorted list of all keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .values
            .read()
            .map(|v| v.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        let values = self
            .values
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))?;

        if let Some(limit) = self.quota {
            let others: usize = values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let requested = others + value.len();
            if requested > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    requested,
                    limit,
                });
            }
        }

        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(values.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let store = InMemoryKeyValueStore::new();
        store.set("greeting", "hola").unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hola"));
        assert!(store.contains("greeting").unwrap());
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.get("nope").unwrap().is_none());
        assert!(!store.contains("nope").unwrap());
    }

    #[test]
    fn set_overwrites() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_reports_existence() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v").unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn invalid_key_is_rejected() {
        let store = InMemoryKeyValueStore::new();
        let err = store.set("bad key", "v").unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey { .. }));
    }

    #[test]
    fn quota_rejects_oversized_writes() {
        let store = InMemoryKeyValueStore::with_quota(8);
        store.set("a", "1234").unwrap();
        let err = store.set("b", "12345").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { limit: 8, .. }));
        assert!(store.get("b").unwrap().is_none());
    }

    #[test]
    fn quota_ignores_value_being_replaced() {
        let store = InMemoryKeyValueStore::with_quota(8);
        store.set("a", "12345678").unwrap();
        store.set("a", "87654321").unwrap();
        assert_eq!(store.total_bytes(), 8);
    }

    #[test]
    fn keys_are_sorted() {
        let store = InMemoryKeyValueStore::new();
        store.set("b", "").unwrap();
        store.set("a", "").unwrap();
        assert_eq!(store.keys(), vec!["a".to_string(), "b".to_string()]);
    }
}
