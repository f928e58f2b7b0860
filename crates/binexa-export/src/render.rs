use std::io;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

use binexa_history::ConversionEntry;

use crate::error::ExportResult;
use crate::options::ExportOptions;

/// Column titles of the exported table.
pub const CSV_HEADER: [&str; 4] = ["Fecha y Hora", "Binario", "Decimal", "Hexadecimal"];

/// File name for an export produced on `date`, e.g.
/// `historial_conversiones_2026-10-17.csv`.
pub fn csv_file_name(date: NaiveDate) -> String {
    format!("historial_conversiones_{}.csv", date.format("%Y-%m-%d"))
}

/// Write `entries` as CSV to `writer`, returning the number of data rows.
///
/// The header is always written, so an empty slice yields a header-only file.
/// An unsupported date pattern fails before any row is written.
pub fn write_csv<W: io::Write>(
    entries: &[ConversionEntry],
    writer: W,
    options: &ExportOptions,
) -> ExportResult<usize> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    let rows = entries
        .iter()
        .map(|entry| options.format_timestamp(entry.timestamp).map(|when| (when, entry)))
        .collect::<ExportResult<Vec<_>>>()?;

    out.write_record(CSV_HEADER)?;
    for (when, entry) in &rows {
        out.write_record([
            when.as_str(),
            entry.binary.as_str(),
            entry.decimal.as_str(),
            entry.hexadecimal.as_str(),
        ])?;
    }
    out.flush()?;

    debug!(rows = entries.len(), "wrote csv export");
    Ok(entries.len())
}

/// Render `entries` as a CSV string.
pub fn to_csv_string(entries: &[ConversionEntry], options: &ExportOptions) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_csv(entries, &mut buf, options)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use binexa_types::{EntryId, NumeralTriple};
    use chrono::{TimeZone, Utc};

    fn entry(id: u64, bin: &str, dec: &str, hex: &str) -> ConversionEntry {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 14, 3, 5).unwrap();
        ConversionEntry::from_triple(EntryId::new(id), &NumeralTriple::new(bin, dec, hex), ts)
    }

    #[test]
    fn empty_history_is_header_only() {
        let out = to_csv_string(&[], &ExportOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![r#""Fecha y Hora","Binario","Decimal","Hexadecimal""#]
        );
    }

    #[test]
    fn rows_follow_entry_order() {
        let entries = vec![entry(2, "11111111", "255", "FF"), entry(1, "1010", "10", "A")];
        let out = to_csv_string(&entries, &ExportOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            r#""17/10/2026, 14:03:05","11111111","255","FF""#
        );
        assert_eq!(lines[2], r#""17/10/2026, 14:03:05","1010","10","A""#);
    }

    #[test]
    fn dates_use_the_configured_offset() {
        let entries = vec![entry(1, "1", "1", "1")];
        let opts = ExportOptions::with_utc_offset_minutes(-5 * 60);
        let out = to_csv_string(&entries, &opts).unwrap();
        assert!(out.contains(r#""17/10/2026, 09:03:05""#));
    }

    #[test]
    fn zero_defaults_are_exported() {
        let entries = vec![entry(1, "", "7", "")];
        let out = to_csv_string(&entries, &ExportOptions::default()).unwrap();
        assert!(out.contains(r#""0","7","0""#));
    }

    #[test]
    fn unsupported_date_pattern_is_reported() {
        let entries = vec![entry(1, "1", "1", "1")];
        let opts = ExportOptions {
            date_format: "%Q".into(),
            ..Default::default()
        };
        let mut buf = Vec::new();
        let err = write_csv(&entries, &mut buf, &opts).unwrap_err();
        assert!(matches!(err, ExportError::DateFormat { .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn write_reports_row_count() {
        let entries = vec![entry(1, "1", "1", "1"), entry(2, "10", "2", "2")];
        let mut buf = Vec::new();
        let rows = write_csv(&entries, &mut buf, &ExportOptions::default()).unwrap();
        assert_eq!(rows, 2);
        assert!(!buf.is_empty());
    }

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(csv_file_name(date), "historial_conversiones_2026-03-09.csv");
    }
}
