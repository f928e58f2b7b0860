//! Numeral validation and base conversion for Binexa.
//!
//! Both halves of this crate are pure functions with no retained state:
//!
//! - [`validate`]: character-level checks deciding whether a string is a
//!   well-formed (possibly empty) bare numeral in a base
//! - [`convert`]: parsing a numeral into a `u64` and rendering it in the
//!   canonical form of another base
//!
//! # Canonical form
//!
//! Rendered numerals use the alphabet `0123456789ABCDEF` (uppercase
//! hexadecimal), carry no prefix, and have no leading zeros. Zero renders as
//! `"0"`.
//!
//! # Range
//!
//! Values are unsigned 64-bit integers. A numeral whose value exceeds
//! `u64::MAX` is reported as [`ConvertError::Overflow`] rather than being
//! truncated.

pub mod convert;
pub mod error;
pub mod validate;

pub use convert::{derive_others, max_digits, parse_numeral, render_numeral, Derived};
pub use error::{ConvertError, ConvertResult};
pub use validate::{is_valid_numeral, normalize_input};
