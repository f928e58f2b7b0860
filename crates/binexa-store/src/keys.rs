//! Storage key validation.
//!
//! Keys double as file names in [`FileKeyValueStore`](crate::FileKeyValueStore),
//! so they are restricted to a portable character set:
//! - Must be non-empty and at most 200 bytes
//! - Only ASCII letters, digits, `_`, `-`, and `.`
//! - Must not start with `.`

use crate::error::{StoreError, StoreResult};

/// Maximum key length in bytes.
pub const MAX_KEY_LEN: usize = 200;

fn invalid(key: &str, reason: impl Into<String>) -> StoreError {
    StoreError::InvalidKey {
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Validate a storage key, returning `Ok(())` if usable.
///
/// # Examples
///
/// ```
/// use binexa_store::validate_key;
///
/// assert!(validate_key("binexa_session_id").is_ok());
/// assert!(validate_key("binexa_history_0192-abcd").is_ok());
/// assert!(validate_key("").is_err());
/// assert!(validate_key("../escape").is_err());
/// ```
pub fn validate_key(key: &str) -> StoreResult<()> {
    if key.is_empty() {
        return Err(invalid(key, "key must not be empty"));
    }
    if key.len() > MAX_KEY_LEN {
        return Err(invalid(key, format!("key longer than {MAX_KEY_LEN} bytes")));
    }
    if key.starts_with('.') {
        return Err(invalid(key, "key must not start with '.'"));
    }
    if let Some(ch) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(invalid(key, format!("contains forbidden character: {ch:?}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(validate_key("binexa_analytics").is_ok());
        assert!(validate_key("a.b-c_d").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_key("").is_err());
    }

    #[test]
    fn rejects_path_separators() {
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("a\\b").is_err());
    }

    #[test]
    fn rejects_leading_dot() {
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("..").is_err());
    }

    #[test]
    fn rejects_whitespace_and_unicode() {
        assert!(validate_key("has space").is_err());
        assert!(validate_key("clé").is_err());
    }

    #[test]
    fn rejects_overlong() {
        assert!(validate_key(&"k".repeat(MAX_KEY_LEN)).is_ok());
        assert!(validate_key(&"k".repeat(MAX_KEY_LEN + 1)).is_err());
    }
}
