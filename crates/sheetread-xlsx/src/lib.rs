//! # sheetread-xlsx
//!
//! XLSX (Office Open XML) reader for sheetread.
//!
//! Worksheets are read in workbook order. Each cell's `t` attribute is mapped
//! onto [`CellKind`](sheetread_core::CellKind): numbers become `Numeric`,
//! booleans become `Bool`, and everything else (shared and inline strings,
//! dates, errors, formulas, blanks) becomes `String`.

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
