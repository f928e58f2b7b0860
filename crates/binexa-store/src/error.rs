//! Error types for key-value storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key is not usable as a storage key.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// Writing the value would exceed the store's capacity.
    #[error("storage quota exceeded writing {key}: {requested} bytes, limit {limit}")]
    QuotaExceeded {
        key: String,
        requested: usize,
        limit: usize,
    },

    /// File I/O error.
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An internal lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    Lock(String),
}

/// Convenience type alias for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
