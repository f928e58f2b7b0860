use thiserror::Error;

/// Errors that can occur while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported date pattern: {pattern:?}")]
    DateFormat { pattern: String },

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;
