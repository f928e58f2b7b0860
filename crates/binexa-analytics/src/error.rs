use thiserror::Error;

/// Errors produced while reading or writing the analytics document.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("corrupt analytics data: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Store(#[from] binexa_store::StoreError),
}

pub type AnalyticsResult<T> = std::result::Result<T, AnalyticsError>;
