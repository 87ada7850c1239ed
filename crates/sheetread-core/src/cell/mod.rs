//! Cell-related types
//!
//! This module contains:
//! - [`CellKind`] - The declared primitive kind of a cell
//! - [`Cell`] - A raw textual value tagged with its kind, with typed accessors

mod kind;
mod value;

pub use kind::CellKind;
pub use value::Cell;
