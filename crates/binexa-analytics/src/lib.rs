//! Usage analytics for Binexa.
//!
//! The application reports what the user does (conversions, saves, deletes,
//! copies, exports) as [`AnalyticsEvent`]s through the [`AnalyticsSink`]
//! trait. Reporting is fire-and-forget: a sink never returns an error to the
//! caller, and a failed write only produces a log line.
//!
//! [`Analytics`] is the persisted sink. It keeps a single [`AnalyticsData`]
//! document under [`ANALYTICS_KEY`] holding the visit log, the event log,
//! per-event-type click counters, and conversion counters per source base.
//! [`StatsReport`] summarizes that document for display.
//!
//! No location or device fingerprinting is collected.

pub mod data;
pub mod error;
pub mod event;
pub mod report;
pub mod tracker;

pub use data::{AnalyticsData, ConversionStats, ConversionsByBase, UserSession};
pub use error::{AnalyticsError, AnalyticsResult};
pub use event::{AnalyticsEvent, EventData, EventKind};
pub use report::{HourBucket, StatsReport, SESSION_DETAIL_LIMIT};
pub use tracker::{Analytics, AnalyticsSink, NullSink, ANALYTICS_KEY};
