//! Table document emission and post-processing passes
//!
//! The renderer emits a commented file header followed by either a floating
//! `table` environment (wrapped in `\resizebox`) or a page-breaking
//! `longtable`. Longtable output needs a rewrite pass over the rendered
//! lines to inject the repeated caption block and the closing rule; row
//! grouping is a second pass over an already-written file.

use std::fmt::Write;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::table::colspec::{column_spec, uses_width_directives};
use crate::core::table::{FormatMetadata, Grid, TableOptions};
use crate::data::constants::{
    BOTTOM_RULE, LINE_BREAK, MID_RULE, PREAMBLE_DEFS, PREAMBLE_PACKAGES, ROW_SPACING, TOP_RULE,
};
use crate::utils::error::{TableError, TableResult};
use crate::utils::sink::TexSink;

lazy_static! {
    static ref LONGTABLE_BEGIN: Regex = Regex::new(r"\\begin\{longtable\}").unwrap();
    static ref LONGTABLE_END: Regex = Regex::new(r"\\end\{longtable\}").unwrap();
}

/// A grid plus its formatting metadata and rendering options, ready to be
/// serialized to LaTeX
#[derive(Debug, Clone)]
pub struct LatexTable {
    grid: Grid,
    metadata: Option<FormatMetadata>,
    options: TableOptions,
}

impl LatexTable {
    pub fn new(grid: Grid) -> Self {
        LatexTable {
            grid,
            metadata: None,
            options: TableOptions::default(),
        }
    }

    pub fn with_metadata(grid: Grid, metadata: FormatMetadata) -> Self {
        LatexTable {
            grid,
            metadata: Some(metadata),
            options: TableOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the complete `.tex` file contents.
    ///
    /// `fname` only feeds the `\input{...}` usage hint in the comment
    /// header; nothing is written here.
    pub fn render(&self, fname: &str, caption: &str) -> TableResult<String> {
        let opts = &self.options;
        let label = opts
            .label
            .clone()
            .unwrap_or_else(|| derive_label(caption));

        let width_cols = uses_width_directives(self.metadata.as_ref());
        let longtable = opts.longtable || width_cols;
        let spec = column_spec(self.grid.col_count(), &opts.col_form, self.metadata.as_ref())?;

        let mut cells = self.grid.escaped(opts.escape_mode);
        if !width_cols {
            // Fixed-width columns wrap in LaTeX itself; everything else
            // needs the manual sub-table wrap.
            cells = cells.wrapped(opts.max_col_width);
        }
        if let Some(formats) = self.metadata.as_ref().and_then(|m| m.formats.as_ref()) {
            cells = cells.with_cell_colors(formats);
        }

        let body = tabular_body(&cells, &spec, opts.header, longtable);
        let mut out = comment_header(fname, longtable);

        if longtable {
            out.push_str(&body);
            Ok(rewrite_longtable(&out, caption, &label, opts.small))
        } else {
            out.push_str("\\begin{table}[H]\n\\centering \n");
            let _ = writeln!(out, "\\caption{{{}}}\\label{{{}}} ", caption, label);
            out.push_str("\\resizebox{\\textwidth}{!}{\n");
            out.push_str(&body);
            out.push_str("}\n\\end{table}\n");
            Ok(out)
        }
    }

    /// Render and write through the given sink
    pub fn write_to(
        &self,
        sink: &mut dyn TexSink,
        path: &str,
        caption: &str,
    ) -> TableResult<()> {
        let rendered = self.render(path, caption)?;
        sink.write_file(path, &rendered)?;
        Ok(())
    }
}

/// Derive a reference label from the caption: `tab:` plus the first ten
/// non-space caption characters.
fn derive_label(caption: &str) -> String {
    let stem: String = caption.chars().filter(|c| *c != ' ').take(10).collect();
    format!("tab:{}", stem)
}

/// Generated-by comment header, listing the preamble lines the table relies
/// on and how to include the file. Informational only.
fn comment_header(fname: &str, longtable: bool) -> String {
    let basename = Path::new(fname)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| fname.to_string());

    let mut out = String::from("% ---- Generated by the gridtex table generator ----\n\n\n");

    if longtable {
        out.push_str("% Include the following lines in preamble:\n");
        for pkg in PREAMBLE_PACKAGES {
            let _ = writeln!(out, "% {}", pkg);
        }
        out.push('\n');
        for def in PREAMBLE_DEFS {
            let _ = writeln!(out, "% {}", def);
        }
    } else {
        out.push_str(
            "% Include the following line in preamble to specify space between grouped rows in tables\n",
        );
        out.push_str("% \\newcommand{\\tableskip}{5pt}\n");
    }

    out.push_str("\n% To include this table, use at the desired location in the document:\n");
    let _ = writeln!(out, "% \\input{{{}}}", basename);
    out.push('\n');
    out
}

/// Booktabs-style table body. Longtable bodies get their closing rule in
/// the rewrite pass instead, so it sits before `\end{longtable}` together
/// with the injected caption block.
fn tabular_body(grid: &Grid, spec: &str, header: bool, longtable: bool) -> String {
    let env = if longtable { "longtable" } else { "tabular" };
    let mut out = String::new();
    let _ = writeln!(out, "\\begin{{{}}}{{{}}}", env, spec);
    out.push_str(TOP_RULE);
    out.push('\n');

    let mut rows = grid.rows().iter();
    if header {
        if let Some(head) = rows.next() {
            let _ = writeln!(out, "{} {}", head.join(" & "), LINE_BREAK);
            out.push_str(MID_RULE);
            out.push('\n');
        }
    }
    for row in rows {
        let _ = writeln!(out, "{} {}", row.join(" & "), LINE_BREAK);
    }

    if !longtable {
        out.push_str(BOTTOM_RULE);
        out.push('\n');
    }
    let _ = writeln!(out, "\\end{{{}}}", env);
    out
}

/// Longtable rewrite pass over the rendered line sequence: allow page
/// breaks at the float position, repeat the caption/label after the opening
/// marker (longtable repeats it per page), optionally wrap the block in a
/// `small` font group, and close with a bottom rule.
fn rewrite_longtable(text: &str, caption: &str, label: &str, small: bool) -> String {
    let mut out: Vec<String> = Vec::new();

    for line in text.lines() {
        if LONGTABLE_BEGIN.is_match(line) {
            if small {
                out.push("\\begin{small}".to_string());
            }
            out.push(line.replacen("{longtable}", "{longtable}[H]", 1));
            out.push(format!(
                "\\caption{{{}}}\\label{{{}}}{} ",
                caption, label, LINE_BREAK
            ));
        } else if LONGTABLE_END.is_match(line) {
            out.push(BOTTOM_RULE.to_string());
            out.push(line.to_string());
            if small {
                out.push("\\end{small}".to_string());
            }
        } else {
            out.push(line.to_string());
        }
    }

    let mut joined = out.join("\n");
    joined.push('\n');
    joined
}

/// Append the `\tableskip` vertical spacing directive after every row
/// between the top and bottom rules of an already-rendered table.
///
/// This replaces horizontal lines between rows, conforming to the booktabs
/// style; `\tableskip` is defined once in the document preamble. Fails with
/// `MissingRule` when the text has no top rule, leaving the input untouched.
pub fn group_table_rows(text: &str) -> TableResult<String> {
    let lines: Vec<&str> = text.lines().collect();
    let top = lines
        .iter()
        .position(|l| l.contains(TOP_RULE))
        .ok_or_else(|| {
            TableError::missing_rule(format!("no {} line found in rendered table", TOP_RULE))
        })?;

    let mut out: Vec<String> = Vec::with_capacity(lines.len() * 2);
    let mut grouping = true;
    for (i, line) in lines.iter().enumerate() {
        out.push((*line).to_string());
        if i > top && grouping {
            if line.contains(BOTTOM_RULE) {
                grouping = false;
            } else {
                out.push(ROW_SPACING.to_string());
            }
        }
    }

    let mut joined = out.join("\n");
    joined.push('\n');
    Ok(joined)
}

/// Read a previously written table back from the sink, group its rows, and
/// write it again. The sink is left untouched when grouping fails.
pub fn group_rows_in_sink(sink: &mut dyn TexSink, path: &str) -> TableResult<()> {
    let text = sink.read_file(path)?;
    let grouped = group_table_rows(&text)?;
    sink.write_file(path, &grouped)?;
    Ok(())
}
