//! Summary statistics over an [`AnalyticsData`] document.

use std::collections::BTreeMap;

use chrono::{FixedOffset, Timelike};
use serde::Serialize;

use binexa_types::Base;

use crate::data::{AnalyticsData, UserSession};

/// Number of sessions listed individually in a report.
pub const SESSION_DETAIL_LIMIT: usize = 10;

/// Number of events recorded during one hour of the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: u64,
}

/// Aggregated view of the analytics document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsReport {
    pub total_sessions: usize,
    pub total_events: usize,
    pub total_conversions: u64,
    /// Events per session, `0.0` when there are no sessions.
    pub average_events_per_session: f64,
    pub clicks: BTreeMap<String, u64>,
    pub conversions_by_base: Vec<(Base, u64)>,
    /// Non-empty hours only, sorted by hour.
    pub events_by_hour: Vec<HourBucket>,
    /// The first [`SESSION_DETAIL_LIMIT`] sessions, in registration order.
    pub session_details: Vec<UserSession>,
}

impl StatsReport {
    /// Summarize `data`, bucketing event times in the `offset` time zone.
    pub fn from_data(data: &AnalyticsData, offset: FixedOffset) -> Self {
        let total_sessions = data.sessions.len();
        let total_events = data.events.len();
        let average_events_per_session = if total_sessions > 0 {
            total_events as f64 / total_sessions as f64
        } else {
            0.0
        };

        let mut hours: BTreeMap<u32, u64> = BTreeMap::new();
        for event in &data.events {
            let hour = event.timestamp.with_timezone(&offset).hour();
            *hours.entry(hour).or_insert(0) += 1;
        }

        Self {
            total_sessions,
            total_events,
            total_conversions: data.conversion_stats.total,
            average_events_per_session,
            clicks: data.button_clicks.clone(),
            conversions_by_base: Base::ALL
                .iter()
                .map(|b| (*b, data.conversion_stats.by_type.get(*b)))
                .collect(),
            events_by_hour: hours
                .into_iter()
                .map(|(hour, count)| HourBucket { hour, count })
                .collect(),
            session_details: data
                .sessions
                .iter()
                .take(SESSION_DETAIL_LIMIT)
                .cloned()
                .collect(),
        }
    }
}
