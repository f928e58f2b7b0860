use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use binexa_types::{Base, SessionId};

use crate::event::AnalyticsEvent;

/// One installation's visit record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub session_id: SessionId,
    pub first_visit: DateTime<Utc>,
    pub last_visit: DateTime<Utc>,
}

/// Conversion counters per source base.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionsByBase {
    pub binary: u64,
    pub decimal: u64,
    pub hexadecimal: u64,
}

impl ConversionsByBase {
    pub fn get(&self, base: Base) -> u64 {
        match base {
            Base::Binary => self.binary,
            Base::Decimal => self.decimal,
            Base::Hexadecimal => self.hexadecimal,
        }
    }

    pub(crate) fn bump(&mut self, base: Base) {
        let slot = match base {
            Base::Binary => &mut self.binary,
            Base::Decimal => &mut self.decimal,
            Base::Hexadecimal => &mut self.hexadecimal,
        };
        *slot += 1;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    pub total: u64,
    pub by_type: ConversionsByBase,
}

/// The whole persisted analytics document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    #[serde(default)]
    pub sessions: Vec<UserSession>,
    #[serde(default)]
    pub events: Vec<AnalyticsEvent>,
    /// Event count keyed by event type name.
    #[serde(default)]
    pub button_clicks: BTreeMap<String, u64>,
    #[serde(default)]
    pub conversion_stats: ConversionStats,
}

impl AnalyticsData {
    pub fn session(&self, id: &SessionId) -> Option<&UserSession> {
        self.sessions.iter().find(|s| &s.session_id == id)
    }
}
