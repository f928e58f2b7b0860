//! Error types for numeral conversion.

use binexa_types::Base;
use thiserror::Error;

/// Errors that can occur while parsing a numeral.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The numeral was empty.
    #[error("empty {base} numeral")]
    Empty { base: Base },

    /// The text contains characters outside the base's alphabet.
    #[error("invalid {base} numeral: {text:?}")]
    InvalidNumeral { base: Base, text: String },

    /// The value does not fit in an unsigned 64-bit integer.
    #[error("{base} numeral exceeds the supported range: {text}")]
    Overflow { base: Base, text: String },
}

/// Convenience type alias for conversion operations.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
