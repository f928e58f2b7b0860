//! Three-field synchronization for Binexa.
//!
//! The [`SyncController`] owns one binary, one decimal, and one hexadecimal
//! text field and keeps them denoting the same value. Every user edit goes
//! through a single gate:
//!
//! 1. hexadecimal input is uppercased;
//! 2. text that is not a valid numeral for the field's base, or whose value
//!    exceeds `u64::MAX`, is discarded without touching stored state;
//! 3. accepted text is stored verbatim, the field becomes the last-edited
//!    source, and the other two fields are re-derived from it.
//!
//! Derivation always completes inside the `&mut self` call that triggered it,
//! so two passes can never interleave.
//!
//! # Modules
//!
//! - [`field`]: [`NumeralField`] and [`ConversionState`]
//! - [`controller`]: [`SyncController`] and [`EditOutcome`]

pub mod controller;
pub mod field;

pub use controller::{EditOutcome, RejectReason, SyncController};
pub use field::{ConversionState, NumeralField};
