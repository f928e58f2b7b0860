use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};

/// Default `strftime` pattern of the date column (`17/10/2026, 14:03:05`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// How timestamps are rendered in an export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Offset from UTC, in minutes, of the time zone used for the date column.
    pub utc_offset_minutes: i32,
    /// `strftime` pattern of the date column.
    pub date_format: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ExportOptions {
    pub fn with_utc_offset_minutes(minutes: i32) -> Self {
        Self {
            utc_offset_minutes: minutes,
            ..Default::default()
        }
    }

    /// The configured offset, or UTC if it is out of range.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }

    /// Render `timestamp` with the date pattern at the configured offset.
    ///
    /// Fails with [`ExportError::DateFormat`] if the pattern has an
    /// unsupported specifier.
    pub fn format_timestamp(&self, timestamp: DateTime<Utc>) -> ExportResult<String> {
        let mut rendered = String::new();
        write!(
            rendered,
            "{}",
            timestamp.with_timezone(&self.offset()).format(&self.date_format)
        )
        .map_err(|_| ExportError::DateFormat {
            pattern: self.date_format.clone(),
        })?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_is_utc() {
        assert_eq!(ExportOptions::default().offset().local_minus_utc(), 0);
    }

    #[test]
    fn offset_in_minutes() {
        let opts = ExportOptions::with_utc_offset_minutes(-300);
        assert_eq!(opts.offset().local_minus_utc(), -300 * 60);
    }

    #[test]
    fn formats_at_offset() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 14, 3, 5).unwrap();
        let opts = ExportOptions::with_utc_offset_minutes(60);
        assert_eq!(opts.format_timestamp(ts).unwrap(), "17/10/2026, 15:03:05");
    }

    #[test]
    fn unsupported_pattern_is_an_error() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 14, 3, 5).unwrap();
        let opts = ExportOptions {
            date_format: "%Q".into(),
            ..Default::default()
        };
        let err = opts.format_timestamp(ts).unwrap_err();
        assert!(matches!(err, ExportError::DateFormat { ref pattern } if pattern == "%Q"));
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let opts = ExportOptions::with_utc_offset_minutes(48 * 60);
        assert_eq!(opts.offset().local_minus_utc(), 0);
    }
}
