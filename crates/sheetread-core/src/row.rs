//! Row type

use std::slice;

use crate::cell::Cell;

/// A single row of data, holding cells in source column order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a new row from its cells
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Get the cells in this row
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by column index
    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Number of cells in row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells in column order
    pub fn iter(&self) -> slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
