//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetread_core::{Cell, Row, Sheet};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a sheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let path = path.as_ref();
        log::debug!("reading CSV file {}", path.display());
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a sheet
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(options.flexible)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            // Quoting is already resolved by the parser; fields are stored verbatim
            let row: Row = record.iter().map(Cell::string).collect();
            rows.push(row);
        }

        log::debug!("read {} CSV records", rows.len());
        Ok(Sheet::new(options.sheet_name.clone(), rows))
    }
}
