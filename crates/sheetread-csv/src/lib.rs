//! # sheetread-csv
//!
//! CSV reader for sheetread.
//!
//! A CSV file becomes a single sheet whose cells are all
//! [`CellKind::String`](sheetread_core::CellKind::String): the format carries
//! no type metadata, so no type detection is attempted.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, DEFAULT_SHEET_NAME};
pub use reader::CsvReader;
