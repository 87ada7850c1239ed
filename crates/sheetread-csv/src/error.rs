//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV reading
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CsvError {
    /// Check if the error came from reading the underlying file
    pub fn is_io(&self) -> bool {
        match self {
            CsvError::Io(_) => true,
            CsvError::Csv(e) => e.is_io_error(),
        }
    }
}
