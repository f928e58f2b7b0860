//! Character-level numeral validation.
//!
//! A numeral is valid for a base when every character belongs to that base's
//! digit alphabet:
//! - binary: `0`, `1`
//! - decimal: ASCII `0`–`9`
//! - hexadecimal: `0`–`9`, `A`–`F`, `a`–`f`
//!
//! The empty string is valid in every base; it represents a field with no
//! input yet. Whitespace, signs, and radix prefixes such as `0x` are not part
//! of any alphabet and are therefore rejected.

use binexa_types::Base;

/// Returns `true` if `ch` is a digit of `base`.
fn is_digit(ch: char, base: Base) -> bool {
    match base {
        Base::Binary => matches!(ch, '0' | '1'),
        Base::Decimal => ch.is_ascii_digit(),
        Base::Hexadecimal => ch.is_ascii_hexdigit(),
    }
}

/// Test whether `text` is a well-formed, possibly empty, bare numeral in `base`.
///
/// # Examples
///
/// ```
/// use binexa_convert::is_valid_numeral;
/// use binexa_types::Base;
///
/// assert!(is_valid_numeral("1010", Base::Binary));
/// assert!(is_valid_numeral("", Base::Decimal));
/// assert!(is_valid_numeral("fF09", Base::Hexadecimal));
/// assert!(!is_valid_numeral("0x1F", Base::Hexadecimal));
/// assert!(!is_valid_numeral("12", Base::Binary));
/// ```
pub fn is_valid_numeral(text: &str, base: Base) -> bool {
    text.chars().all(|ch| is_digit(ch, base))
}

/// Normalize raw input for `base` before validation and storage.
///
/// Hexadecimal input is uppercased; other bases are returned unchanged.
pub fn normalize_input(text: &str, base: Base) -> String {
    match base {
        Base::Hexadecimal => text.to_ascii_uppercase(),
        Base::Binary | Base::Decimal => text.to_string(),
    }
}
