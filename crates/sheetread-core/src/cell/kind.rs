//! Cell kind

use std::fmt;

/// The primitive data kind declared for a cell
///
/// Adapters assign the kind once, from source metadata where the format has
/// any. Delimited text has none, so all of its cells are [`CellKind::String`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    /// Text (also dates, formulas, errors and blanks from typed sources)
    #[default]
    String,
    /// Number
    Numeric,
    /// Boolean
    Bool,
}

impl CellKind {
    /// Get the kind's display name
    pub fn name(self) -> &'static str {
        match self {
            CellKind::String => "String",
            CellKind::Numeric => "Numeric",
            CellKind::Bool => "Bool",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
