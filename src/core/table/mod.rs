//! Grid data model and the table generation pipeline
//!
//! A `Grid` is constructed once from external data (spreadsheet rows or a
//! tabular file), pushed through the escape/wrap/color transforms, and
//! serialized by the renderer. Each transform returns a new grid so the
//! stages stay testable in isolation.

pub mod cell;
pub mod colspec;
pub mod render;

pub use cell::{CellFormat, HAlign, Rgb};
pub use colspec::column_spec;
pub use render::{group_rows_in_sink, group_table_rows, LatexTable};

use crate::core::escape::{escape, EscapeMode};
use crate::core::wrap::wrap_cell;
use crate::utils::error::{TableError, TableResult};

/// A rectangular grid of string cells with a uniform column count
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Build a grid from rows of cells, validating rectangularity
    pub fn from_rows(rows: Vec<Vec<String>>) -> TableResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(TableError::invalid_grid(
                "grid must contain at least one row and one column",
            ));
        }
        let col_count = rows[0].len();
        if let Some(bad) = rows.iter().position(|r| r.len() != col_count) {
            return Err(TableError::invalid_grid(format!(
                "row {} has {} cells, expected {}",
                bad,
                rows[bad].len(),
                col_count
            )));
        }
        Ok(Grid { rows })
    }

    /// Build a grid from rows with possibly absent cells; absent cells
    /// become empty strings.
    pub fn from_optional_rows(rows: Vec<Vec<Option<String>>>) -> TableResult<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Escape LaTeX-reserved characters in every cell
    pub fn escaped(&self, mode: EscapeMode) -> Grid {
        self.map(|cell| escape(cell, mode))
    }

    /// Wrap every overlong cell to `max_width` columns
    pub fn wrapped(&self, max_width: usize) -> Grid {
        self.map(|cell| wrap_cell(cell, max_width))
    }

    /// Prefix each cell with its background color directive. Cells without
    /// a matching format record are left untouched.
    pub fn with_cell_colors(&self, formats: &[Vec<CellFormat>]) -> Grid {
        Grid {
            rows: self
                .rows
                .iter()
                .enumerate()
                .map(|(ri, row)| {
                    row.iter()
                        .enumerate()
                        .map(|(ci, cell)| {
                            match formats.get(ri).and_then(|fr| fr.get(ci)) {
                                Some(fmt) => format!("{}{}", fmt.color_prefix(), cell),
                                None => cell.clone(),
                            }
                        })
                        .collect()
                })
                .collect(),
        }
    }

    fn map(&self, f: impl Fn(&str) -> String) -> Grid {
        Grid {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|cell| f(cell)).collect())
                .collect(),
        }
    }
}

/// Optional formatting metadata accompanying a grid
///
/// Both fields are independently optional; operations that need a field
/// check for its presence and fall back to unformatted defaults when it is
/// absent.
#[derive(Debug, Clone, Default)]
pub struct FormatMetadata {
    /// Per-cell format records, parallel to the grid
    pub formats: Option<Vec<Vec<CellFormat>>>,
    /// Per-column pixel widths, used only to derive relative fractions
    pub col_widths: Option<Vec<f64>>,
}

/// Rendering options
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Reference label; derived from the caption when absent
    pub label: Option<String>,
    /// Column alignment pattern (see `column_spec`)
    pub col_form: String,
    /// Treat the first grid row as a header row
    pub header: bool,
    /// Wrap longtable output in a `small` font block
    pub small: bool,
    /// Emit a page-breaking `longtable` instead of a floating `table`.
    /// Forced on whenever width metadata is supplied.
    pub longtable: bool,
    /// Maximum character width per column before wrapping kicks in
    pub max_col_width: usize,
    /// Newline handling during escaping
    pub escape_mode: EscapeMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            label: None,
            col_form: "lcr".to_string(),
            header: true,
            small: true,
            longtable: false,
            max_col_width: 45,
            escape_mode: EscapeMode::Collapse,
        }
    }
}
