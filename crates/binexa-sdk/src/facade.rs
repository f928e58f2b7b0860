use std::io;
use std::sync::Arc;

use tracing::warn;

use binexa_analytics::{Analytics, AnalyticsSink, EventData, EventKind, NullSink, StatsReport};
use binexa_export::{write_csv, ExportOptions};
use binexa_history::{HistoryError, HistoryStore, SessionRecord};
use binexa_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
use binexa_sync::{EditOutcome, SyncController};
use binexa_types::{Base, EntryId, SessionId};

use crate::config::BinexaConfig;
use crate::error::SdkResult;
use crate::view::BinexaView;

/// The Binexa application behind its UI boundary.
///
/// Each `on_*` method is the reaction to one user event. History mutations
/// are written through to storage immediately; a failed write keeps the
/// in-memory state and is parked for [`take_write_error`](Self::take_write_error).
pub struct Binexa {
    sync: SyncController,
    history: HistoryStore,
    sink: Arc<dyn AnalyticsSink>,
    analytics: Option<Analytics>,
    export: ExportOptions,
    write_error: Option<HistoryError>,
}

impl std::fmt::Debug for Binexa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binexa")
            .field("sync", &self.sync)
            .field("history", &self.history)
            .field("analytics", &self.analytics.is_some())
            .finish_non_exhaustive()
    }
}

impl Binexa {
    /// Open Binexa over `store`.
    ///
    /// The session is established and its history loaded before this
    /// returns, so no event can be handled against an unloaded history.
    pub fn open(store: Arc<dyn KeyValueStore>, config: &BinexaConfig) -> Self {
        let analytics = config.analytics.then(|| Analytics::new(store.clone()));
        let sink: Arc<dyn AnalyticsSink> = match &analytics {
            Some(a) => Arc::new(a.clone()),
            None => Arc::new(NullSink),
        };
        Self::assemble(store, config, sink, analytics)
    }

    /// Open Binexa over `store`, sending events to `sink` instead of the
    /// persisted analytics document.
    pub fn with_sink(
        store: Arc<dyn KeyValueStore>,
        config: &BinexaConfig,
        sink: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self::assemble(store, config, sink, None)
    }

    /// Open Binexa over files in `config.data_dir`.
    pub fn open_dir(config: &BinexaConfig) -> SdkResult<Self> {
        let store = FileKeyValueStore::open(&config.data_dir)?;
        Ok(Self::open(Arc::new(store), config))
    }

    /// An ephemeral instance with default settings.
    pub fn in_memory() -> Self {
        Self::open(
            Arc::new(InMemoryKeyValueStore::new()),
            &BinexaConfig::default(),
        )
    }

    fn assemble(
        store: Arc<dyn KeyValueStore>,
        config: &BinexaConfig,
        sink: Arc<dyn AnalyticsSink>,
        analytics: Option<Analytics>,
    ) -> Self {
        let record = SessionRecord::establish(store.as_ref());
        let history = HistoryStore::open(store, record.into_id());
        sink.visit(history.session());

        Self {
            sync: SyncController::new(),
            history,
            sink,
            analytics,
            export: config.export_options(),
            write_error: None,
        }
    }

    // ---- UI events ----

    /// The user typed `text` into the field for `base`.
    pub fn on_edit(&mut self, base: Base, text: &str) -> EditOutcome {
        let outcome = self.sync.edit(base, text);
        if let EditOutcome::Accepted { value: Some(_) } = outcome {
            let stored = self.sync.text(base).to_string();
            self.sink
                .record(EventKind::Conversion, Some(EventData::conversion(base, stored)));
        }
        outcome
    }

    /// The user cleared the three fields.
    pub fn on_clear(&mut self) {
        self.sync.clear();
        self.sink.record(EventKind::Clear, None);
    }

    /// The user saved the current conversion.
    ///
    /// Returns `None` when all three fields are empty.
    pub fn on_save(&mut self) -> Option<EntryId> {
        let id = self.history.save(&self.sync.snapshot())?;
        self.persist_history();
        self.sink.record(EventKind::Save, Some(EventData::entry(id)));
        Some(id)
    }

    /// The user deleted the history entry `id`. Unknown ids are a no-op.
    pub fn on_delete(&mut self, id: EntryId) -> bool {
        if !self.history.delete(id) {
            return false;
        }
        self.persist_history();
        self.sink.record(EventKind::Delete, Some(EventData::entry(id)));
        true
    }

    /// The user emptied the history. Returns how many entries were removed.
    pub fn on_clear_history(&mut self) -> usize {
        let removed = self.history.clear();
        self.persist_history();
        self.sink.record(EventKind::ClearHistory, None);
        removed
    }

    /// The user copied the field for `base`.
    ///
    /// Returns the text to place on the clipboard, or `None` if the field is
    /// empty.
    pub fn on_copy(&mut self, base: Base) -> Option<String> {
        let text = self.sync.text(base);
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.sink
            .record(EventKind::Copy, Some(EventData::copy(base, text.clone())));
        Some(text)
    }

    /// The user exported the history as CSV into `writer`.
    ///
    /// Returns the number of rows written, header excluded.
    pub fn on_export_csv<W: io::Write>(&mut self, writer: W) -> SdkResult<usize> {
        let rows = write_csv(self.history.entries(), writer, &self.export)?;
        self.sink.record(EventKind::ExportCsv, None);
        Ok(rows)
    }

    // ---- Read model ----

    pub fn view(&self) -> BinexaView {
        BinexaView {
            binary: self.sync.text(Base::Binary).to_string(),
            decimal: self.sync.text(Base::Decimal).to_string(),
            hexadecimal: self.sync.text(Base::Hexadecimal).to_string(),
            history: self.history.entries().to_vec(),
        }
    }

    /// The most recent failed history write, if any, clearing it.
    pub fn take_write_error(&mut self) -> Option<HistoryError> {
        self.write_error.take()
    }

    pub fn session(&self) -> &SessionId {
        self.history.session()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn sync(&self) -> &SyncController {
        &self.sync
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.export
    }

    /// Usage report, or `None` when analytics are disabled.
    pub fn stats(&self) -> Option<StatsReport> {
        let analytics = self.analytics.as_ref()?;
        Some(StatsReport::from_data(&analytics.data(), self.export.offset()))
    }

    fn persist_history(&mut self) {
        if let Err(e) = self.history.persist() {
            warn!(session = %self.history.session(), error = %e, "could not persist history");
            self.write_error = Some(e);
        }
    }
}
