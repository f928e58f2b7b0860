//! The session-scoped [`HistoryStore`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use binexa_store::KeyValueStore;
use binexa_types::{EntryId, NumeralTriple, SessionId};

use crate::entry::ConversionEntry;
use crate::error::HistoryResult;
use crate::persist::{load_entries, persist_entries};

/// Ordered, newest-first list of saved conversions for one session.
///
/// Mutations only touch memory; call [`persist`](Self::persist) to write the
/// list back. Entry ids are unique for the lifetime of the store, including
/// ids of entries that have since been deleted.
pub struct HistoryStore {
    session: SessionId,
    entries: Vec<ConversionEntry>,
    /// Highest id ever seen or issued by this store.
    last_id: Option<EntryId>,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("session", &self.session)
            .field("entries", &self.entries.len())
            .field("last_id", &self.last_id)
            .finish()
    }
}

impl HistoryStore {
    /// Open the history of `session`, loading it from `store`.
    ///
    /// Unreadable or corrupt data is logged and replaced by an empty history.
    pub fn open(store: Arc<dyn KeyValueStore>, session: SessionId) -> Self {
        let entries = match load_entries(store.as_ref(), &session) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(%session, error = %e, "could not load history, starting empty");
                Vec::new()
            }
        };
        let last_id = entries.iter().map(|e| e.id).max();
        Self {
            session,
            entries,
            last_id,
            store,
        }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[ConversionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&ConversionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Save `triple` as a new entry stamped with the current time.
    ///
    /// Returns `None` without saving when all three fields are empty.
    pub fn save(&mut self, triple: &NumeralTriple) -> Option<EntryId> {
        self.save_at(triple, Utc::now())
    }

    /// Save `triple` as a new entry stamped with `now`.
    pub fn save_at(&mut self, triple: &NumeralTriple, now: DateTime<Utc>) -> Option<EntryId> {
        if triple.is_empty() {
            return None;
        }
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = EntryId::next_after(self.last_id, now_ms);
        self.last_id = Some(id);

        let entry = ConversionEntry::from_triple(id, triple, now);
        info!(%id, decimal = %entry.decimal, "saved conversion");
        self.entries.insert(0, entry);
        Some(id)
    }

    /// Remove the entry with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            info!(%id, "deleted history entry");
        }
        removed
    }

    /// Remove every entry, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        info!(count, "cleared history");
        count
    }

    /// Write the current list to storage.
    pub fn persist(&self) -> HistoryResult<()> {
        persist_entries(self.store.as_ref(), &self.session, &self.entries)
    }

    /// Replace the in-memory list with what is stored.
    ///
    /// On error the in-memory list is left untouched.
    pub fn reload(&mut self) -> HistoryResult<()> {
        let entries = load_entries(self.store.as_ref(), &self.session)?;
        let stored_max = entries.iter().map(|e| e.id).max();
        self.last_id = self.last_id.max(stored_max);
        self.entries = entries;
        Ok(())
    }
}
