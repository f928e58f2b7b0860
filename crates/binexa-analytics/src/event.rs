use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use binexa_types::{Base, EntryId};

/// What the user did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Conversion,
    Save,
    Clear,
    Delete,
    Copy,
    ExportExcel,
    ExportCsv,
    ClearHistory,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::Conversion,
        EventKind::Save,
        EventKind::Clear,
        EventKind::Delete,
        EventKind::Copy,
        EventKind::ExportExcel,
        EventKind::ExportCsv,
        EventKind::ClearHistory,
    ];

    /// The snake_case name, also used as the click-counter key.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Conversion => "conversion",
            EventKind::Save => "save",
            EventKind::Clear => "clear",
            EventKind::Delete => "delete",
            EventKind::Copy => "copy",
            EventKind::ExportExcel => "export_excel",
            EventKind::ExportCsv => "export_csv",
            EventKind::ClearHistory => "clear_history",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional payload attached to an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Base>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Base>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<EntryId>,
}

impl EventData {
    /// Payload of a conversion driven from `from` with input `value`.
    pub fn conversion(from: Base, value: impl Into<String>) -> Self {
        Self {
            from: Some(from),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Payload naming a history entry.
    pub fn entry(id: EntryId) -> Self {
        Self {
            entry_id: Some(id),
            ..Default::default()
        }
    }

    /// Payload of a copy of the `base` field holding `value`.
    pub fn copy(base: Base, value: impl Into<String>) -> Self {
        Self {
            from: Some(base),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// One recorded event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EventData>,
}
