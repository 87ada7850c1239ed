//! Prelude module - common imports for sheetread users
//!
//! ```rust
//! use sheetread::prelude::*;
//! ```

pub use crate::{
    // Entry points
    open,
    open_with_options,
    // Model types
    Cell,
    CellKind,
    // Error types
    Error,
    Format,
    OpenOptions,
    Result,
    Row,
    Sheet,
    Spreadsheet,
};
