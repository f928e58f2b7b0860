//! Error types for history operations.

use thiserror::Error;

/// Errors that can occur while loading or persisting history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The stored value could not be parsed.
    #[error("corrupt data under {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the history failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Store(#[from] binexa_store::StoreError),
}

/// Convenience type alias for history operations.
pub type HistoryResult<T> = std::result::Result<T, HistoryError>;
