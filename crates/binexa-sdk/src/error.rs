use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("could not read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("store error: {0}")]
    Store(#[from] binexa_store::StoreError),

    #[error("history error: {0}")]
    History(#[from] binexa_history::HistoryError),

    #[error("analytics error: {0}")]
    Analytics(#[from] binexa_analytics::AnalyticsError),

    #[error("export error: {0}")]
    Export(#[from] binexa_export::ExportError),
}

pub type SdkResult<T> = Result<T, SdkError>;
