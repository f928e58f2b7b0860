use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown base: {0}")]
    UnknownBase(String),

    #[error("invalid entry id: {0}")]
    InvalidEntryId(String),

    #[error("session id must not be empty")]
    EmptySessionId,
}
