//! # sheetread
//!
//! A uniform, read-only accessor for spreadsheet files.
//!
//! XLSX and CSV files are normalized into one model of sheets, rows and
//! cells, so callers can read both without format-specific code.
//!
//! ## Features
//!
//! - Read XLSX files (Office Open XML), every worksheet in workbook order
//! - Read CSV files as a single sheet named "Sheet 1"
//! - Per-cell declared kind (String, Numeric, Bool) with lazy typed accessors
//! - Sheet lookup by position or by name
//!
//! ## Example
//!
//! ```rust,no_run
//! use sheetread::prelude::*;
//!
//! let ss = sheetread::open("report.xlsx")?;
//!
//! for row in ss.sheets()[0].rows() {
//!     for cell in row.cells() {
//!         match cell.kind() {
//!             CellKind::Numeric => println!("{}", cell.as_float()?),
//!             CellKind::Bool => println!("{}", cell.as_bool()?),
//!             CellKind::String => println!("{}", cell.as_str()),
//!         }
//!     }
//! }
//!
//! if let Some(sheet) = ss.sheet_by_name("Sheet 2") {
//!     println!("{}", sheet.cell(2, 3));
//! }
//! # Ok::<(), sheetread::Error>(())
//! ```

pub mod format;
pub mod opener;
pub mod prelude;

pub use format::Format;
pub use opener::{open, open_with_options, OpenOptions};

// Re-export core types
pub use sheetread_core::{
    BoxError, Cell, CellKind, Error, InvalidBool, Result, Row, Sheet, Spreadsheet,
};

// Re-export I/O types
pub use sheetread_csv::{CsvError, CsvReadOptions, CsvReader, DEFAULT_SHEET_NAME};
pub use sheetread_xlsx::{XlsxError, XlsxReader};
