//! The [`AnalyticsSink`] trait and its persisted implementation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use binexa_store::KeyValueStore;
use binexa_types::SessionId;

use crate::data::{AnalyticsData, UserSession};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::event::{AnalyticsEvent, EventData, EventKind};

/// Storage key holding the analytics document.
pub const ANALYTICS_KEY: &str = "binexa_analytics";

/// Receiver of fire-and-forget usage events.
pub trait AnalyticsSink: Send + Sync {
    /// Record one event. Must not fail or block on anything slow.
    fn record(&self, kind: EventKind, data: Option<EventData>);

    /// Note that `session` is active.
    fn visit(&self, session: &SessionId);
}

/// A sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn record(&self, _kind: EventKind, _data: Option<EventData>) {}

    fn visit(&self, _session: &SessionId) {}
}

/// Analytics persisted as one JSON document in a [`KeyValueStore`].
///
/// Every call reads the document, applies one change, and writes it back.
#[derive(Clone)]
pub struct Analytics {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics").finish_non_exhaustive()
    }
}

impl Analytics {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the stored document.
    pub fn try_data(&self) -> AnalyticsResult<AnalyticsData> {
        match self.store.get(ANALYTICS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(AnalyticsError::Corrupt),
            None => Ok(AnalyticsData::default()),
        }
    }

    /// Read the stored document, falling back to an empty one.
    pub fn data(&self) -> AnalyticsData {
        self.try_data().unwrap_or_else(|e| {
            warn!(error = %e, "could not load analytics, using empty data");
            AnalyticsData::default()
        })
    }

    fn save(&self, data: &AnalyticsData) -> AnalyticsResult<()> {
        let json = serde_json::to_string(data)?;
        self.store.set(ANALYTICS_KEY, &json)?;
        Ok(())
    }

    fn save_or_warn(&self, data: &AnalyticsData) {
        if let Err(e) = self.save(data) {
            warn!(error = %e, "could not save analytics");
        }
    }

    /// Register a visit of `session` now.
    pub fn init_session(&self, session: &SessionId) {
        self.init_session_at(session, Utc::now());
    }

    /// Register `session` as a visit at `now`.
    ///
    /// A known session has its last visit bumped; an unknown one is added.
    pub fn init_session_at(&self, session: &SessionId, now: DateTime<Utc>) {
        let mut data = self.data();
        match data.sessions.iter_mut().find(|s| &s.session_id == session) {
            Some(existing) => existing.last_visit = now,
            None => data.sessions.push(UserSession {
                session_id: session.clone(),
                first_visit: now,
                last_visit: now,
            }),
        }
        self.save_or_warn(&data);
    }

    /// Record an event stamped with the current time.
    pub fn track(&self, kind: EventKind, data: Option<EventData>) {
        self.track_at(kind, data, Utc::now());
    }

    /// Record an event stamped with `now`.
    pub fn track_at(&self, kind: EventKind, data: Option<EventData>, now: DateTime<Utc>) {
        let mut doc = self.data();

        *doc.button_clicks.entry(kind.as_str().to_string()).or_insert(0) += 1;

        if kind == EventKind::Conversion {
            if let Some(from) = data.as_ref().and_then(|d| d.from) {
                doc.conversion_stats.total += 1;
                doc.conversion_stats.by_type.bump(from);
            }
        }

        doc.events.push(AnalyticsEvent {
            kind,
            timestamp: now,
            data,
        });
        debug!(%kind, "tracked event");
        self.save_or_warn(&doc);
    }

    /// Remove all analytics data.
    pub fn clear(&self) -> AnalyticsResult<()> {
        self.store.remove(ANALYTICS_KEY)?;
        Ok(())
    }
}

impl AnalyticsSink for Analytics {
    fn record(&self, kind: EventKind, data: Option<EventData>) {
        self.track(kind, data);
    }

    fn visit(&self, session: &SessionId) {
        self.init_session(session);
    }
}
