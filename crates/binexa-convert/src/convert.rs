//! Parsing and rendering numerals across bases.

use std::num::IntErrorKind;

use binexa_types::Base;

use crate::error::{ConvertError, ConvertResult};
use crate::validate::is_valid_numeral;

/// Maximum number of significant digits a `u64` needs in `base`.
pub const fn max_digits(base: Base) -> usize {
    match base {
        Base::Binary => 64,
        Base::Decimal => 20,
        Base::Hexadecimal => 16,
    }
}

/// Parse a non-empty numeral in `base` as an unsigned 64-bit integer.
///
/// Leading zeros are accepted. Lowercase hexadecimal digits are accepted.
pub fn parse_numeral(text: &str, base: Base) -> ConvertResult<u64> {
    if text.is_empty() {
        return Err(ConvertError::Empty { base });
    }
    if !is_valid_numeral(text, base) {
        return Err(ConvertError::InvalidNumeral {
            base,
            text: text.to_string(),
        });
    }
    u64::from_str_radix(text, base.radix()).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ConvertError::Overflow {
            base,
            text: text.to_string(),
        },
        _ => ConvertError::InvalidNumeral {
            base,
            text: text.to_string(),
        },
    })
}

/// Render `value` in `base` in canonical form.
pub fn render_numeral(value: u64, base: Base) -> String {
    match base {
        Base::Binary => format!("{value:b}"),
        Base::Decimal => value.to_string(),
        Base::Hexadecimal => format!("{value:X}"),
    }
}

/// Result of one derivation pass: the text of the two non-source bases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derived {
    source: Base,
    value: Option<u64>,
    targets: [(Base, String); 2],
}

impl Derived {
    fn cleared(source: Base) -> Self {
        let [a, b] = source.others();
        Self {
            source,
            value: None,
            targets: [(a, String::new()), (b, String::new())],
        }
    }

    /// The base the derivation was computed from.
    pub fn source(&self) -> Base {
        self.source
    }

    /// The parsed value, or `None` if the source was empty or invalid.
    pub fn value(&self) -> Option<u64> {
        self.value
    }

    /// Derived text for `base`, or `None` when `base` is the source.
    pub fn get(&self, base: Base) -> Option<&str> {
        self.targets
            .iter()
            .find(|(b, _)| *b == base)
            .map(|(_, text)| text.as_str())
    }

    /// Iterate over `(base, text)` for both targets.
    pub fn iter(&self) -> impl Iterator<Item = (Base, &str)> {
        self.targets.iter().map(|(b, t)| (*b, t.as_str()))
    }

    /// Returns `true` if both targets were cleared.
    pub fn is_cleared(&self) -> bool {
        self.targets.iter().all(|(_, t)| t.is_empty())
    }
}

/// Derive the canonical text of the two bases other than `source`.
///
/// An empty or invalid `value` clears both targets instead of leaving stale
/// text behind. A valid numeral that does not fit in `u64` fails with
/// [`ConvertError::Overflow`].
///
/// # Examples
///
/// ```
/// use binexa_convert::derive_others;
/// use binexa_types::Base;
///
/// let d = derive_others("1010", Base::Binary).unwrap();
/// assert_eq!(d.get(Base::Decimal), Some("10"));
/// assert_eq!(d.get(Base::Hexadecimal), Some("A"));
/// assert_eq!(d.get(Base::Binary), None);
/// ```
pub fn derive_others(value: &str, source: Base) -> ConvertResult<Derived> {
    if value.is_empty() || !is_valid_numeral(value, source) {
        return Ok(Derived::cleared(source));
    }
    let parsed = parse_numeral(value, source)?;
    let [a, b] = source.others();
    Ok(Derived {
        source,
        value: Some(parsed),
        targets: [
            (a, render_numeral(parsed, a)),
            (b, render_numeral(parsed, b)),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn binary_scenario() {
        let d = derive_others("1010", Base::Binary).unwrap();
        assert_eq!(d.get(Base::Decimal), Some("10"));
        assert_eq!(d.get(Base::Hexadecimal), Some("A"));
        assert_eq!(d.value(), Some(10));
    }

    #[test]
    fn decimal_scenario() {
        let d = derive_others("255", Base::Decimal).unwrap();
        assert_eq!(d.get(Base::Binary), Some("11111111"));
        assert_eq!(d.get(Base::Hexadecimal), Some("FF"));
    }

    #[test]
    fn hex_lowercase_is_accepted() {
        let d = derive_others("ff", Base::Hexadecimal).unwrap();
        assert_eq!(d.get(Base::Decimal), Some("255"));
        assert_eq!(d.get(Base::Binary), Some("11111111"));
    }

    #[test]
    fn empty_clears_targets() {
        for base in Base::ALL {
            let d = derive_others("", base).unwrap();
            assert!(d.is_cleared());
            assert_eq!(d.value(), None);
            assert_eq!(d.iter().count(), 2);
        }
    }

    #[test]
    fn invalid_clears_targets() {
        let d = derive_others("12", Base::Binary).unwrap();
        assert!(d.is_cleared());
    }

    #[test]
    fn zero_renders_as_single_digit() {
        let d = derive_others("0000", Base::Binary).unwrap();
        assert_eq!(d.get(Base::Decimal), Some("0"));
        assert_eq!(d.get(Base::Hexadecimal), Some("0"));
    }

    #[test]
    fn leading_zeros_are_dropped() {
        let d = derive_others("000A", Base::Hexadecimal).unwrap();
        assert_eq!(d.get(Base::Binary), Some("1010"));
        assert_eq!(d.get(Base::Decimal), Some("10"));
    }

    #[test]
    fn max_value_converts() {
        let d = derive_others("18446744073709551615", Base::Decimal).unwrap();
        assert_eq!(d.get(Base::Hexadecimal), Some("FFFFFFFFFFFFFFFF"));
        assert_eq!(d.get(Base::Binary).map(str::len), Some(64));
    }

    #[test]
    fn overflow_is_rejected() {
        let err = derive_others("18446744073709551616", Base::Decimal).unwrap_err();
        assert!(matches!(err, ConvertError::Overflow { base: Base::Decimal, .. }));

        let err = derive_others("10000000000000000", Base::Hexadecimal).unwrap_err();
        assert!(matches!(err, ConvertError::Overflow { .. }));
    }

    #[test]
    fn leading_zeros_do_not_count_toward_overflow() {
        let padded = format!("{}{}", "0".repeat(10), "FFFFFFFFFFFFFFFF");
        let d = derive_others(&padded, Base::Hexadecimal).unwrap();
        assert_eq!(d.value(), Some(u64::MAX));
    }

    #[test]
    fn parse_reports_empty_and_invalid() {
        assert_eq!(
            parse_numeral("", Base::Decimal),
            Err(ConvertError::Empty { base: Base::Decimal })
        );
        assert!(matches!(
            parse_numeral("1 2", Base::Decimal),
            Err(ConvertError::InvalidNumeral { .. })
        ));
    }

    #[test]
    fn render_uses_uppercase_hex() {
        assert_eq!(render_numeral(0xabcdef, Base::Hexadecimal), "ABCDEF");
        assert_eq!(render_numeral(0, Base::Binary), "0");
    }

    #[test]
    fn max_digits_matches_u64_max() {
        for base in Base::ALL {
            assert_eq!(render_numeral(u64::MAX, base).len(), max_digits(base));
        }
    }

    proptest! {
        #[test]
        fn binary_decimal_binary_law(bits in "[01]{1,64}") {
            let decimal = derive_others(&bits, Base::Binary).unwrap();
            let decimal = decimal.get(Base::Decimal).unwrap().to_string();
            let back = derive_others(&decimal, Base::Decimal).unwrap();
            let trimmed = bits.trim_start_matches('0');
            let expected = if trimmed.is_empty() { "0" } else { trimmed };
            prop_assert_eq!(back.get(Base::Binary).unwrap(), expected);
        }

        #[test]
        fn every_target_denotes_the_source_value(value in any::<u64>(), idx in 0usize..3) {
            let source = Base::ALL[idx];
            let text = render_numeral(value, source);
            let derived = derive_others(&text, source).unwrap();
            for (base, target) in derived.iter() {
                prop_assert_eq!(parse_numeral(target, base).unwrap(), value);
            }
        }
    }
}
