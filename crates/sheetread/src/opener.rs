//! Opening spreadsheet files

use std::path::Path;

use crate::format::Format;
use sheetread_core::{Error, Result, Sheet, Spreadsheet};
use sheetread_csv::{CsvError, CsvReadOptions, CsvReader};
use sheetread_xlsx::{XlsxError, XlsxReader};

/// Options for [`open_with_options`]
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Options used when the file is CSV
    pub csv: CsvReadOptions,
}

/// Reads the sheets of one file format from a path
trait SheetSource {
    fn read_sheets(&self, path: &Path) -> Result<Vec<Sheet>>;
}

struct CsvSource<'a>(&'a CsvReadOptions);

impl SheetSource for CsvSource<'_> {
    fn read_sheets(&self, path: &Path) -> Result<Vec<Sheet>> {
        let sheet = CsvReader::read_file(path, self.0).map_err(|e| csv_error(path, e))?;
        Ok(vec![sheet])
    }
}

struct XlsxSource;

impl SheetSource for XlsxSource {
    fn read_sheets(&self, path: &Path) -> Result<Vec<Sheet>> {
        XlsxReader::read_file(path).map_err(|e| xlsx_error(path, e))
    }
}

fn csv_error(path: &Path, err: CsvError) -> Error {
    if err.is_io() {
        Error::file_open(path, err)
    } else {
        Error::parse("read CSV file", err)
    }
}

fn xlsx_error(path: &Path, err: XlsxError) -> Error {
    if err.is_io() {
        Error::file_open(path, err)
    } else {
        Error::parse("read XLSX file", err)
    }
}

/// Open a spreadsheet file
///
/// Supported formats are XLSX and CSV (RFC 4180), chosen by the file
/// extension without regard to case. A CSV file yields a single sheet named
/// "Sheet 1" whose cells are all strings.
///
/// An unknown extension fails with [`Error::UnsupportedFormat`] before the
/// file is touched.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Spreadsheet> {
    open_with_options(path, &OpenOptions::default())
}

/// Open a spreadsheet file with explicit options
pub fn open_with_options<P: AsRef<Path>>(path: P, options: &OpenOptions) -> Result<Spreadsheet> {
    let path = path.as_ref();
    let format = Format::from_path(path)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
    log::debug!("opening {} as {:?}", path.display(), format);

    let sheets = match format {
        Format::Csv => CsvSource(&options.csv).read_sheets(path)?,
        Format::Xlsx => XlsxSource.read_sheets(path)?,
    };

    Ok(Spreadsheet::new(sheets))
}
