//! The [`KeyValueStore`] trait defining the persistence interface.

use crate::error::StoreResult;

/// Durable string storage addressed by flat keys.
///
/// Implementations must be thread-safe (`Send + Sync`). Keys are checked
/// with [`validate_key`](crate::validate_key) before any read or write.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Create or replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`.
    ///
    /// Returns `Ok(true)` if the key existed, `Ok(false)` otherwise.
    fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Returns `true` if a value is stored under `key`.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
