//! # sheetread-core
//!
//! Core data structures for the sheetread spreadsheet reader.
//!
//! This crate provides the read-only model shared by every format adapter:
//! - [`Cell`] and [`CellKind`] - A raw text value with its declared kind and typed accessors
//! - [`Row`] - Cells in column order
//! - [`Sheet`] - A named sequence of rows
//! - [`Spreadsheet`] - Sheets in document order plus a name index
//!
//! ## Example
//!
//! ```rust
//! use sheetread_core::{Cell, CellKind, Row, Sheet, Spreadsheet};
//!
//! let sheet = Sheet::new(
//!     "Sheet 1",
//!     vec![Row::new(vec![Cell::string("id"), Cell::numeric("1.9")])],
//! );
//! let ss = Spreadsheet::new(vec![sheet]);
//!
//! let cell = ss.sheet_by_name("Sheet 1").unwrap().cell(0, 1);
//! assert!(cell.is_kind(CellKind::Numeric));
//! assert_eq!(cell.as_int().unwrap(), 1);
//! assert!(cell.as_i64().is_err());
//! ```

pub mod cell;
pub mod error;
pub mod row;
pub mod sheet;
pub mod spreadsheet;

// Re-exports for convenience
pub use cell::{Cell, CellKind};
pub use error::{BoxError, Error, InvalidBool, Result};
pub use row::Row;
pub use sheet::Sheet;
pub use spreadsheet::Spreadsheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
