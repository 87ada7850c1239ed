//! Cell value type

use std::fmt;

use crate::cell::CellKind;
use crate::error::{Error, InvalidBool, Result};

/// A single piece of data in a spreadsheet
///
/// The raw text is always stored, whatever the kind. Typed accessors parse it
/// on every call, so a malformed value only fails the accessor that asks for it
/// and [`Cell::as_str`] stays available as a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    kind: CellKind,
    raw: String,
}

impl Cell {
    /// Create a new cell with the given kind and raw text
    pub fn new<S: Into<String>>(kind: CellKind, raw: S) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    /// Create a new string cell
    pub fn string<S: Into<String>>(raw: S) -> Self {
        Self::new(CellKind::String, raw)
    }

    /// Create a new numeric cell
    pub fn numeric<S: Into<String>>(raw: S) -> Self {
        Self::new(CellKind::Numeric, raw)
    }

    /// Create a new boolean cell
    pub fn boolean<S: Into<String>>(raw: S) -> Self {
        Self::new(CellKind::Bool, raw)
    }

    /// Get the declared kind of this cell
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Check if the cell was declared with `kind`
    pub fn is_kind(&self, kind: CellKind) -> bool {
        self.kind == kind
    }

    /// Get the raw cell text, whatever the kind
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the cell data as a float
    ///
    /// Fails with [`Error::TypeMismatch`] unless the cell is numeric.
    pub fn as_float(&self) -> Result<f64> {
        self.expect_kind(CellKind::Numeric)?;
        self.parse_float()
    }

    /// Get the cell data as an integer, truncating any fractional part
    ///
    /// The text is parsed as a float first, so `"1.9"` yields `1`. Values
    /// outside the `i64` range saturate.
    pub fn as_int(&self) -> Result<i64> {
        self.expect_kind(CellKind::Numeric)?;
        Ok(self.parse_float()?.trunc() as i64)
    }

    /// Get the cell data as a 64-bit integer
    ///
    /// Unlike [`Cell::as_int`], the text must be a plain base-10 integer
    /// literal: `"1.5"` is a parse error here.
    pub fn as_i64(&self) -> Result<i64> {
        self.expect_kind(CellKind::Numeric)?;
        self.raw
            .parse::<i64>()
            .map_err(|e| Error::parse("convert cell data to integer", e))
    }

    /// Get the cell data as a bool
    ///
    /// Accepts `1`, `t`, `true`, `0`, `f` and `false`, ignoring case.
    pub fn as_bool(&self) -> Result<bool> {
        self.expect_kind(CellKind::Bool)?;
        parse_bool(&self.raw)
            .ok_or_else(|| Error::parse("convert cell data to bool", InvalidBool(self.raw.clone())))
    }

    fn expect_kind(&self, expected: CellKind) -> Result<()> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected,
                actual: self.kind,
            })
        }
    }

    fn parse_float(&self) -> Result<f64> {
        self.raw
            .parse::<f64>()
            .map_err(|e| Error::parse("convert cell data to number", e))
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    if s == "1" || s.eq_ignore_ascii_case("t") || s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s == "0" || s.eq_ignore_ascii_case("f") || s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
