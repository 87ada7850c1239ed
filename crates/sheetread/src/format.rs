//! Supported file formats

use std::path::Path;

/// A spreadsheet file format, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Comma-separated values
    Csv,
    /// Office Open XML workbook
    Xlsx,
}

impl Format {
    /// Detect the format from a path's extension, ignoring case
    ///
    /// The extension is whatever follows the last `.` of the file name, so a
    /// bare `.csv` counts as CSV. Returns `None` when the path has no
    /// extension or an unknown one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path
            .as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase());

        match extension.as_deref() {
            Some("csv") => Some(Format::Csv),
            Some("xlsx") => Some(Format::Xlsx),
            _ => None,
        }
    }

    /// Get the canonical file extension
    pub fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Xlsx => "xlsx",
        }
    }
}
