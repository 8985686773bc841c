//! Core table generation modules
//!
//! This module contains the generation pipeline:
//! - `escape`: LaTeX-reserved character escaping
//! - `wrap`: greedy width-constrained cell wrapping
//! - `table`: grid data model, column specs, and rendering

pub mod escape;
pub mod table;
pub mod wrap;

// Re-export main types and functions
pub use escape::{escape, EscapeMode};
pub use table::{
    column_spec, group_rows_in_sink, group_table_rows, CellFormat, FormatMetadata, Grid, HAlign,
    LatexTable, Rgb, TableOptions,
};
pub use wrap::wrap_cell;
