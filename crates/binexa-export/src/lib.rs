//! CSV export of saved conversion history.
//!
//! Entries are written in the order given (the history's newest-first
//! order), one row each, under the header
//! `"Fecha y Hora","Binario","Decimal","Hexadecimal"`. Every field is quoted.
//! The export never modifies the entries it is handed.

pub mod error;
pub mod options;
pub mod render;

pub use error::{ExportError, ExportResult};
pub use options::ExportOptions;
pub use render::{csv_file_name, to_csv_string, write_csv, CSV_HEADER};
