use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use binexa_types::{Base, EntryId, NumeralTriple};

/// An immutable snapshot of one saved conversion.
///
/// Field text is always non-empty: empty live fields are stored as `"0"`.
/// Timestamps are kept at millisecond precision so that they survive the
/// JSON round trip unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEntry {
    pub id: EntryId,
    pub binary: String,
    pub decimal: String,
    pub hexadecimal: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversionEntry {
    /// Build an entry from a live triple, defaulting empty fields to `"0"`.
    pub fn from_triple(id: EntryId, triple: &NumeralTriple, timestamp: DateTime<Utc>) -> Self {
        let filled = triple.with_zero_defaults();
        Self {
            id,
            binary: filled.binary,
            decimal: filled.decimal,
            hexadecimal: filled.hexadecimal,
            timestamp: timestamp.trunc_subsecs(3),
        }
    }

    /// Text of the field for `base`.
    pub fn text(&self, base: Base) -> &str {
        match base {
            Base::Binary => &self.binary,
            Base::Decimal => &self.decimal,
            Base::Hexadecimal => &self.hexadecimal,
        }
    }

    pub fn triple(&self) -> NumeralTriple {
        NumeralTriple::new(&self.binary, &self.decimal, &self.hexadecimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn empty_fields_default_to_zero() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let entry = ConversionEntry::from_triple(
            EntryId::new(1),
            &NumeralTriple::new("", "", "F"),
            ts,
        );
        assert_eq!(entry.binary, "0");
        assert_eq!(entry.decimal, "0");
        assert_eq!(entry.hexadecimal, "F");
        assert_eq!(entry.text(Base::Hexadecimal), "F");
    }

    #[test]
    fn timestamp_is_truncated_to_millis() {
        let ts = Utc
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let entry = ConversionEntry::from_triple(EntryId::new(1), &NumeralTriple::default(), ts);
        assert_eq!(entry.timestamp.timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn json_uses_camel_case_and_numeric_id() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let entry = ConversionEntry::from_triple(
            EntryId::new(7),
            &NumeralTriple::new("1010", "10", "A"),
            ts,
        );
        let value: serde_json::Value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["hexadecimal"], "A");
        assert!(value["timestamp"].as_str().unwrap().starts_with("2026-01-02T03:04:05"));
    }
}
