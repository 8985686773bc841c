//! Column-format string synthesis
//!
//! Builds the token string passed to `\begin{tabular}` / `\begin{longtable}`:
//! either plain alignment characters derived from a pattern, or per-column
//! width directives computed from spreadsheet pixel widths.

use std::fmt::Write;

use crate::core::table::{CellFormat, FormatMetadata};
use crate::utils::error::{TableError, TableResult};

/// Whether the metadata carries everything the width-directive path needs:
/// pixel widths plus at least one row of per-cell formats (the first row
/// supplies the per-column alignments).
pub fn uses_width_directives(metadata: Option<&FormatMetadata>) -> bool {
    metadata.is_some_and(|m| {
        m.col_widths.is_some() && m.formats.as_ref().is_some_and(|f| !f.is_empty())
    })
}

/// Build the column-format string for a table with `col_count` columns.
///
/// With complete width metadata, each column becomes a fixed-width directive
/// whose fraction of `\linewidth` is its pixel width over the total. With
/// incomplete or absent metadata the pattern rules apply: the literal default
/// `"lcr"` synthesizes a left edge, centered middle columns, and a right
/// edge; a single character repeats per column; anything else is used
/// verbatim (the caller is responsible for matching the column count).
pub fn column_spec(
    col_count: usize,
    pattern: &str,
    metadata: Option<&FormatMetadata>,
) -> TableResult<String> {
    if let Some(meta) = metadata {
        if let (Some(widths), Some(first_row)) = (
            meta.col_widths.as_deref(),
            meta.formats.as_ref().and_then(|f| f.first()),
        ) {
            return width_directive_spec(widths, first_row);
        }
    }
    Ok(pattern_spec(col_count, pattern))
}

/// One `<type>{\dimexpr <fraction>\linewidth-2\tabcolsep}` directive per
/// column, fraction rounded to four decimal places.
fn width_directive_spec(widths: &[f64], first_row: &[CellFormat]) -> TableResult<String> {
    let total: f64 = widths.iter().sum();
    if widths.is_empty() || total <= 0.0 {
        return Err(TableError::degenerate_widths(
            "column pixel widths must sum to a positive value",
        ));
    }

    let mut spec = String::new();
    for (fmt, width) in first_row.iter().zip(widths) {
        let _ = write!(
            spec,
            "{}{{\\dimexpr {:.4}\\linewidth-2\\tabcolsep}} ",
            fmt.align.column_token(),
            width / total
        );
    }
    Ok(spec)
}

fn pattern_spec(col_count: usize, pattern: &str) -> String {
    if pattern == "lcr" && col_count >= 2 {
        let mut spec = String::with_capacity(col_count);
        spec.push('l');
        for _ in 0..col_count - 2 {
            spec.push('c');
        }
        spec.push('r');
        spec
    } else if pattern.chars().count() == 1 {
        pattern.repeat(col_count)
    } else {
        pattern.to_string()
    }
}
