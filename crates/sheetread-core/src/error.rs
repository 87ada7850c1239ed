//! Error types for sheetread-core

use std::path::PathBuf;

use thiserror::Error;

use crate::cell::CellKind;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed underlying cause carried by [`Error::FileOpen`] and [`Error::Parse`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while opening a spreadsheet or reading a cell
#[derive(Debug, Error)]
pub enum Error {
    /// File extension is not one of the supported formats
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The file could not be opened or read
    #[error("Failed to open file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Source content or cell text could not be parsed
    #[error("Failed to {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: BoxError,
    },

    /// Typed accessor called on a cell of another kind
    #[error("Cell kind mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: CellKind,
        actual: CellKind,
    },
}

impl Error {
    /// Create a new "file open" error for `path`
    pub fn file_open<P, E>(path: P, source: E) -> Self
    where
        P: Into<PathBuf>,
        E: Into<BoxError>,
    {
        Error::FileOpen {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create a new parse error; `context` reads as "failed to {context}"
    pub fn parse<S, E>(context: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxError>,
    {
        Error::Parse {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Check if this is an [`Error::UnsupportedFormat`]
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Error::UnsupportedFormat(_))
    }

    /// Check if this is an [`Error::FileOpen`]
    pub fn is_file_open(&self) -> bool {
        matches!(self, Error::FileOpen { .. })
    }

    /// Check if this is an [`Error::Parse`]
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Check if this is an [`Error::TypeMismatch`]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

/// Cell text that is not a recognized boolean literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid boolean literal {0:?}")]
pub struct InvalidBool(pub String);
