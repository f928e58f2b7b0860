//! Saved conversion history for Binexa.
//!
//! A history is an ordered, newest-first list of immutable
//! [`ConversionEntry`] snapshots scoped to one session. Sessions are
//! established once per installation by [`SessionRecord`] and reused on every
//! later run.
//!
//! # Architecture
//!
//! - **Entries** are created only by [`HistoryStore::save`], never mutated,
//!   and destroyed only by [`HistoryStore::delete`] or [`HistoryStore::clear`].
//! - **Persistence** is explicit: the in-memory list changes first, then
//!   [`HistoryStore::persist`] writes the whole list as JSON under the
//!   session's key. A failed write leaves the in-memory list intact.
//! - **Loading** happens in [`HistoryStore::open`], before any mutation is
//!   possible. Unreadable data falls back to an empty history.
//!
//! # Modules
//!
//! - [`entry`]: [`ConversionEntry`]
//! - [`session`]: [`SessionRecord`], lazily created session ids
//! - [`persist`]: raw [`load_entries`] / [`persist_entries`] and storage keys
//! - [`store`]: [`HistoryStore`]
//! - [`error`]: Error types

pub mod entry;
pub mod error;
pub mod persist;
pub mod session;
pub mod store;

pub use entry::ConversionEntry;
pub use error::{HistoryError, HistoryResult};
pub use persist::{history_key, load_entries, persist_entries};
pub use session::{SessionRecord, SESSION_KEY};
pub use store::HistoryStore;
