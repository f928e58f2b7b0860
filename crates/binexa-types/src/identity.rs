use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// Durable identifier scoping one saved history.
///
/// Generated once per installation (UUID v7, so ids sort by creation time)
/// and reused on every later run. Ids read back from storage are accepted
/// verbatim as long as they are non-empty.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh session id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(TypeError::EmptySessionId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short identifier (first 8 characters).
    pub fn short_id(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a saved history entry.
///
/// Derived from the save time in milliseconds since the UNIX epoch and bumped
/// when two saves land in the same millisecond, so ids within one history are
/// unique and strictly increasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id to assign next: `now_ms`, or one past `previous` if the clock
    /// has not moved beyond it.
    pub fn next_after(previous: Option<EntryId>, now_ms: u64) -> Self {
        match previous {
            Some(prev) if prev.0 >= now_ms => Self(prev.0.saturating_add(1)),
            _ => Self(now_ms),
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidEntryId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_session_ids_are_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn session_id_rejects_blank() {
        assert_eq!(SessionId::new("   ").unwrap_err(), TypeError::EmptySessionId);
    }

    #[test]
    fn session_id_is_trimmed() {
        let id = SessionId::new("  abc  ").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn short_id_truncates() {
        let id = SessionId::new("0123456789abcdef").unwrap();
        assert_eq!(id.short_id(), "01234567");
        let short = SessionId::new("abc").unwrap();
        assert_eq!(short.short_id(), "abc");
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let id = SessionId::new("s-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"s-1\"");
    }

    #[test]
    fn entry_id_uses_clock_when_ahead() {
        let id = EntryId::next_after(Some(EntryId::new(100)), 200);
        assert_eq!(id.get(), 200);
    }

    #[test]
    fn entry_id_bumps_when_clock_stalls() {
        let id = EntryId::next_after(Some(EntryId::new(200)), 200);
        assert_eq!(id.get(), 201);
        let behind = EntryId::next_after(Some(EntryId::new(500)), 200);
        assert_eq!(behind.get(), 501);
    }

    #[test]
    fn entry_id_first_uses_clock() {
        assert_eq!(EntryId::next_after(None, 42).get(), 42);
    }

    #[test]
    fn entry_id_parse() {
        assert_eq!("17".parse::<EntryId>().unwrap(), EntryId::new(17));
        assert!("x17".parse::<EntryId>().is_err());
        assert!("-1".parse::<EntryId>().is_err());
    }
}
