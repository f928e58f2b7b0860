//! Lazily created, durable session identifiers.

use binexa_store::{validate_key, KeyValueStore};
use binexa_types::SessionId;
use tracing::{info, warn};

use crate::persist::history_key;

/// Storage key holding the session id.
pub const SESSION_KEY: &str = "binexa_session_id";

/// The session this installation's history is scoped to.
///
/// Established once and reused. Nothing here rotates or expires it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    id: SessionId,
    created: bool,
}

impl SessionRecord {
    /// Read the stored session id, or create and store a new one.
    ///
    /// Never fails: an unreadable or unusable stored id is replaced by a
    /// fresh one, and a failure to store the fresh id is logged. In that case
    /// the id lives for this process only.
    pub fn establish(store: &dyn KeyValueStore) -> Self {
        match store.get(SESSION_KEY) {
            Ok(Some(raw)) => match Self::usable(&raw) {
                Some(id) => {
                    return Self { id, created: false };
                }
                None => warn!(stored = %raw, "stored session id is unusable, replacing it"),
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "could not read session id, starting a new session"),
        }

        let id = SessionId::generate();
        if let Err(e) = store.set(SESSION_KEY, id.as_str()) {
            warn!(error = %e, "could not store new session id");
        }
        info!(session = %id, "created session");
        Self { id, created: true }
    }

    fn usable(raw: &str) -> Option<SessionId> {
        let id = SessionId::new(raw).ok()?;
        validate_key(&history_key(&id)).ok()?;
        Some(id)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns `true` if the session was created by this call.
    pub fn is_new(&self) -> bool {
        self.created
    }

    pub fn into_id(self) -> SessionId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binexa_store::InMemoryKeyValueStore;

    #[test]
    fn first_establish_creates_and_stores() {
        let store = InMemoryKeyValueStore::new();
        let record = SessionRecord::establish(&store);
        assert!(record.is_new());
        assert_eq!(
            store.get(SESSION_KEY).unwrap().as_deref(),
            Some(record.id().as_str())
        );
    }

    #[test]
    fn second_establish_reuses() {
        let store = InMemoryKeyValueStore::new();
        let first = SessionRecord::establish(&store);
        let second = SessionRecord::establish(&store);
        assert!(!second.is_new());
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn unusable_stored_id_is_replaced() {
        let store = InMemoryKeyValueStore::new();
        store.set(SESSION_KEY, "has spaces / slashes").unwrap();
        let record = SessionRecord::establish(&store);
        assert!(record.is_new());
        assert_ne!(record.id().as_str(), "has spaces / slashes");
    }

    #[test]
    fn blank_stored_id_is_replaced() {
        let store = InMemoryKeyValueStore::new();
        store.set(SESSION_KEY, "   ").unwrap();
        assert!(SessionRecord::establish(&store).is_new());
    }

    #[test]
    fn write_failure_still_yields_a_session() {
        let store = InMemoryKeyValueStore::with_quota(0);
        let record = SessionRecord::establish(&store);
        assert!(record.is_new());
        assert!(store.get(SESSION_KEY).unwrap().is_none());
    }
}
