//! Foundation types for Binexa.
//!
//! This crate provides the vocabulary shared by every other Binexa crate:
//! which bases a numeral can be written in, the three-field snapshot of a
//! conversion, and the identifiers used to scope and address saved history.
//!
//! # Key Types
//!
//! - [`Base`]: One of binary, decimal, or hexadecimal
//! - [`NumeralTriple`]: The binary/decimal/hexadecimal text of one value
//! - [`SessionId`]: Durable identifier that scopes a saved history
//! - [`EntryId`]: Time-derived identifier of a saved history entry

pub mod base;
pub mod error;
pub mod identity;
pub mod triple;

pub use base::Base;
pub use error::TypeError;
pub use identity::{EntryId, SessionId};
pub use triple::NumeralTriple;
