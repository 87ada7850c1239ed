//! Spreadsheet type - the top-level document structure

use std::slice;

use ahash::AHashMap;

use crate::sheet::Sheet;

/// A read-only spreadsheet: sheets in document order plus a name index
///
/// The sheet list owns the sheets. The name index only holds positions into
/// it and is built once in [`Spreadsheet::new`]. When two sheets share a name,
/// the later one wins the index entry while both stay in [`Spreadsheet::sheets`].
#[derive(Debug, Clone)]
pub struct Spreadsheet {
    sheets: Vec<Sheet>,
    by_name: AHashMap<String, usize>,
}

impl Spreadsheet {
    /// Create a spreadsheet from its sheets
    pub fn new(sheets: Vec<Sheet>) -> Self {
        let mut by_name = AHashMap::with_capacity(sheets.len());
        for (idx, sheet) in sheets.iter().enumerate() {
            by_name.insert(sheet.name().to_string(), idx);
        }
        Self { sheets, by_name }
    }

    /// Get all sheets in document order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the spreadsheet has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.by_name.get(name).map(|&idx| &self.sheets[idx])
    }

    /// Iterate over sheet names in document order
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(Sheet::name)
    }

    /// Iterate over all sheets
    pub fn iter(&self) -> slice::Iter<'_, Sheet> {
        self.sheets.iter()
    }

    /// Consume the spreadsheet, returning its sheets
    pub fn into_sheets(self) -> Vec<Sheet> {
        self.sheets
    }
}

impl<'a> IntoIterator for &'a Spreadsheet {
    type Item = &'a Sheet;
    type IntoIter = slice::Iter<'a, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.iter()
    }
}
