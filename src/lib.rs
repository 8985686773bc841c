//! # gridtex
//!
//! Grid-to-LaTeX table generator for engineering-report authoring.
//!
//! ## Features
//!
//! - **Escaping**: backslash-escapes the LaTeX-reserved `&`, `$`, `%` in cell text
//! - **Greedy Wrapping**: overlong cells become nested sub-tables broken at column boundaries
//! - **Booktabs Output**: `table` environments with top/mid/bottom rules, no vertical lines
//! - **Longtable Mode**: page-breaking tables with the caption repeated per page
//! - **Cell Colors**: per-cell `\cellcolor` directives from spreadsheet formatting metadata
//! - **Width Directives**: column widths as fractions of `\linewidth` from pixel widths
//! - **Row Grouping**: `\tableskip` spacing between rows as a post-pass over the written file
//!
//! ## Usage Examples
//!
//! ### Plain table
//!
//! ```rust
//! use gridtex::{Grid, LatexTable, MemoryTexSink, TexSink};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["Part".to_string(), "Mass".to_string()],
//!     vec!["Strut".to_string(), "1.2 kg".to_string()],
//! ]).unwrap();
//!
//! let mut sink = MemoryTexSink::new();
//! LatexTable::new(grid)
//!     .write_to(&mut sink, "parts.tex", "Structural parts")
//!     .unwrap();
//!
//! let tex = sink.read_file("parts.tex").unwrap();
//! assert!(tex.contains("\\begin{table}[H]"));
//! assert!(tex.contains("\\label{tab:Structural}"));
//! ```
//!
//! ### Row grouping
//!
//! ```rust
//! use gridtex::{group_rows_in_sink, Grid, LatexTable, MemoryTexSink, TexSink};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["a".to_string(), "b".to_string()],
//!     vec!["c".to_string(), "d".to_string()],
//! ]).unwrap();
//!
//! let mut sink = MemoryTexSink::new();
//! LatexTable::new(grid)
//!     .write_to(&mut sink, "t.tex", "Grouped")
//!     .unwrap();
//! group_rows_in_sink(&mut sink, "t.tex").unwrap();
//!
//! assert!(sink.read_file("t.tex").unwrap().contains("\\addlinespace[\\tableskip]"));
//! ```

/// Core table generation modules
pub mod core;

/// Data layer - static fragments and lookup tables
pub mod data;

/// Utility modules
pub mod utils;

// Re-export the generation pipeline
pub use core::escape::{escape, EscapeMode};
pub use core::table::{
    column_spec, group_rows_in_sink, group_table_rows, CellFormat, FormatMetadata, Grid, HAlign,
    LatexTable, Rgb, TableOptions,
};
pub use core::wrap::wrap_cell;

// Re-export data tables
pub use data::constants;

// Re-export utilities
pub use utils::error::{TableError, TableResult};
pub use utils::sink::{MemoryTexSink, SinkError, StdTexSink, TexSink};
