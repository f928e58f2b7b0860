//! High-level SDK for Binexa.
//!
//! [`Binexa`] is the single entry point a front end talks to. It wires the
//! three-field [`SyncController`], the session's [`HistoryStore`], the
//! analytics sink and the CSV exporter over one [`KeyValueStore`], and exposes
//! them as `on_*` event handlers plus a [`BinexaView`] read model.

pub mod config;
pub mod error;
pub mod facade;
pub mod view;

pub use config::{default_data_dir, BinexaConfig, CONFIG_FILE_NAME};
pub use error::{SdkError, SdkResult};
pub use facade::Binexa;
pub use view::BinexaView;

// Re-export key types
pub use binexa_analytics::{AnalyticsSink, EventData, EventKind, NullSink, StatsReport};
pub use binexa_history::{ConversionEntry, HistoryStore};
pub use binexa_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use binexa_sync::{EditOutcome, RejectReason, SyncController};
pub use binexa_types::{Base, EntryId, NumeralTriple, SessionId};
