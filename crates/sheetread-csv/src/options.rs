//! CSV options

/// Name given to the single sheet read from a CSV file
pub const DEFAULT_SHEET_NAME: &str = "Sheet 1";

/// Options for reading CSV files
///
/// There is no header option: the first record is ordinary data.
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Allow records with differing field counts (default: false)
    ///
    /// When false, a record whose field count differs from the first record
    /// is a parse error.
    pub flexible: bool,
    /// Name of the resulting sheet (default: "Sheet 1")
    pub sheet_name: String,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            flexible: false,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}
