//! Sheet type

use crate::cell::Cell;
use crate::row::Row;

/// A single named page of tabular data
///
/// Rows keep their source order and may have different lengths; nothing is
/// padded or truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    rows: Vec<Row>,
}

impl Sheet {
    /// Create a new sheet
    pub fn new<S: Into<String>>(name: S, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the rows of this sheet
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the cell at (`row`, `col`), both 0-based
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range. Use [`Sheet::get`] when the
    /// coordinates are not known to be valid.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.rows[row].cells()[col]
    }

    /// Get the cell at (`row`, `col`), or `None` if out of range
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}
