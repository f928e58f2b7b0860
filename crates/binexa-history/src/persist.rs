//! Raw load/persist of a session's entry list.

use binexa_store::KeyValueStore;
use binexa_types::SessionId;
use tracing::debug;

use crate::entry::ConversionEntry;
use crate::error::{HistoryError, HistoryResult};

/// Prefix of every history key.
pub const HISTORY_KEY_PREFIX: &str = "binexa_history_";

/// Storage key holding the history of `session`.
pub fn history_key(session: &SessionId) -> String {
    format!("{HISTORY_KEY_PREFIX}{session}")
}

/// Read the ordered entry list of `session`.
///
/// A missing key is an empty history. Malformed JSON is reported as
/// [`HistoryError::Corrupt`]; callers decide whether to fall back.
pub fn load_entries(
    store: &dyn KeyValueStore,
    session: &SessionId,
) -> HistoryResult<Vec<ConversionEntry>> {
    let key = history_key(session);
    let Some(raw) = store.get(&key)? else {
        return Ok(Vec::new());
    };
    let entries: Vec<ConversionEntry> =
        serde_json::from_str(&raw).map_err(|source| HistoryError::Corrupt {
            key: key.clone(),
            source,
        })?;
    debug!(%session, count = entries.len(), "loaded history");
    Ok(entries)
}

/// Write the full ordered entry list of `session`, replacing what was stored.
pub fn persist_entries(
    store: &dyn KeyValueStore,
    session: &SessionId,
    entries: &[ConversionEntry],
) -> HistoryResult<()> {
    let json = serde_json::to_string(entries)?;
    store.set(&history_key(session), &json)?;
    debug!(%session, count = entries.len(), "persisted history");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use binexa_store::InMemoryKeyValueStore;
    use binexa_types::{EntryId, NumeralTriple};
    use chrono::{TimeZone, Timelike, Utc};

    fn session() -> SessionId {
        SessionId::new("0192a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b").unwrap()
    }

    fn sample_entries() -> Vec<ConversionEntry> {
        let t1 = Utc
            .with_ymd_and_hms(2026, 10, 17, 9, 30, 0)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap();
        let t2 = Utc.with_ymd_and_hms(2026, 10, 17, 9, 29, 59).unwrap();
        vec![
            ConversionEntry::from_triple(EntryId::new(2), &NumeralTriple::new("11111111", "255", "FF"), t1),
            ConversionEntry::from_triple(EntryId::new(1), &NumeralTriple::new("1010", "10", "A"), t2),
        ]
    }

    #[test]
    fn key_is_scoped_by_session() {
        assert_eq!(
            history_key(&session()),
            "binexa_history_0192a1b2-c3d4-7e5f-8a9b-0c1d2e3f4a5b"
        );
    }

    #[test]
    fn missing_history_loads_empty() {
        let store = InMemoryKeyValueStore::new();
        assert!(load_entries(&store, &session()).unwrap().is_empty());
    }

    #[test]
    fn persist_then_load_is_identical() {
        let store = InMemoryKeyValueStore::new();
        let entries = sample_entries();
        persist_entries(&store, &session(), &entries).unwrap();
        let loaded = load_entries(&store, &session()).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn sessions_do_not_share_history() {
        let store = InMemoryKeyValueStore::new();
        persist_entries(&store, &session(), &sample_entries()).unwrap();
        let other = SessionId::new("other").unwrap();
        assert!(load_entries(&store, &other).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let store = InMemoryKeyValueStore::new();
        store.set(&history_key(&session()), "{not json").unwrap();
        let err = load_entries(&store, &session()).unwrap_err();
        assert!(matches!(err, HistoryError::Corrupt { .. }));
    }

    #[test]
    fn write_failure_is_reported() {
        let store = InMemoryKeyValueStore::with_quota(4);
        let err = persist_entries(&store, &session(), &sample_entries()).unwrap_err();
        assert!(matches!(err, HistoryError::Store(_)));
    }
}
