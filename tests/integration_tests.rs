//! Integration tests for gridtex end-to-end table generation

use gridtex::{
    group_rows_in_sink, group_table_rows, CellFormat, EscapeMode, FormatMetadata, Grid, HAlign,
    LatexTable, MemoryTexSink, Rgb, TableError, TableOptions, TexSink,
};

fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
    .unwrap()
}

// ============================================================================
// Plain table end-to-end
// ============================================================================

mod plain_table {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_by_two_demo() {
        let mut sink = MemoryTexSink::new();
        LatexTable::new(grid(&[&["A", "B"], &["1", "2"]]))
            .write_to(&mut sink, "out/demo.tex", "Demo")
            .unwrap();

        let tex = sink.read_file("out/demo.tex").unwrap();
        assert!(tex.contains("\\begin{table}[H]"));
        assert!(tex.contains("\\caption{Demo}\\label{tab:Demo}"));
        // Two columns under the default "lcr" pattern collapse to just the
        // left and right edge alignments.
        assert!(tex.contains("\\begin{tabular}{lr}"));
        assert!(tex.contains("A & B \\\\"));
        assert!(tex.contains("1 & 2 \\\\"));
        // The usage hint names the file, not the full path.
        assert!(tex.contains("% \\input{demo.tex}"));
    }

    #[test]
    fn test_markup_row_count_matches_grid() {
        let g = grid(&[&["a", "b", "c"], &["d", "e", "f"], &["g", "h", "i"]]);
        let tex = LatexTable::new(g.clone()).render("t.tex", "Rows").unwrap();

        let markup_rows = tex
            .lines()
            .filter(|l| l.trim_end().ends_with("\\\\"))
            .count();
        assert_eq!(markup_rows, g.row_count());
    }

    #[test]
    fn test_reserved_characters_escaped_in_output() {
        let tex = LatexTable::new(grid(&[&["R&D", "100%"], &["$40", "ok"]]))
            .render("t.tex", "Budget")
            .unwrap();
        assert!(tex.contains("R\\&D & 100\\% \\\\"));
        assert!(tex.contains("\\$40 & ok \\\\"));
    }

    #[test]
    fn test_overlong_cell_wrapped_into_subtable() {
        let opts = TableOptions {
            header: false,
            max_col_width: 20,
            ..Default::default()
        };
        let tex = LatexTable::new(grid(&[&[
            "a cell with far too many words to fit on one line",
            "x",
        ]]))
        .with_options(opts)
        .render("t.tex", "Wrapped")
        .unwrap();

        assert!(tex.contains("\\begin{tabular}[c]{@{}c@{}}"));
        assert!(tex.contains("\\end{tabular} & x \\\\"));
    }

    #[test]
    fn test_multiline_cell_collapsed_by_default() {
        let tex = LatexTable::new(grid(&[&["two\nlines", "x"]]))
            .render("t.tex", "Lines")
            .unwrap();
        assert!(tex.contains("twolines & x \\\\"));
    }

    #[test]
    fn test_multiline_cell_preserved_when_requested() {
        let opts = TableOptions {
            header: false,
            escape_mode: EscapeMode::PreserveLines,
            ..Default::default()
        };
        let tex = LatexTable::new(grid(&[&["two\nlines", "x"]]))
            .with_options(opts)
            .render("t.tex", "Lines")
            .unwrap();
        assert!(tex.contains("\\begin{tabular}[c]{@{}c@{}}two\\\\lines\\end{tabular}"));
    }
}

// ============================================================================
// Longtable mode with spreadsheet metadata
// ============================================================================

mod longtable_metadata {
    use super::*;
    use pretty_assertions::assert_eq;

    fn n2_metadata() -> FormatMetadata {
        let shaded = CellFormat::new(Rgb::new(0.85, 0.85, 0.85), HAlign::Left);
        let plain = CellFormat::new(Rgb::WHITE, HAlign::Right);
        FormatMetadata {
            formats: Some(vec![
                vec![shaded.clone(), plain.clone()],
                vec![plain.clone(), shaded],
            ]),
            col_widths: Some(vec![25.0, 75.0]),
        }
    }

    #[test]
    fn test_metadata_forces_longtable() {
        let tex = LatexTable::with_metadata(grid(&[&["A", "B"], &["1", "2"]]), n2_metadata())
            .render("chart.tex", "System N2 chart")
            .unwrap();

        assert!(tex.contains("\\begin{longtable}[H]"));
        assert!(!tex.contains("\\begin{table}[H]"));
        assert!(!tex.contains("\\resizebox"));
    }

    #[test]
    fn test_caption_repeated_after_opening_marker() {
        let tex = LatexTable::with_metadata(grid(&[&["A", "B"], &["1", "2"]]), n2_metadata())
            .render("chart.tex", "System N2 chart")
            .unwrap();

        let lines: Vec<&str> = tex.lines().collect();
        let begin = lines
            .iter()
            .position(|l| l.contains("\\begin{longtable}[H]"))
            .unwrap();
        assert!(lines[begin + 1].starts_with("\\caption{System N2 chart}\\label{tab:SystemN2ch}"));
    }

    #[test]
    fn test_width_directive_column_spec() {
        let tex = LatexTable::with_metadata(grid(&[&["A", "B"], &["1", "2"]]), n2_metadata())
            .render("chart.tex", "Chart")
            .unwrap();

        assert!(tex.contains("L{\\dimexpr 0.2500\\linewidth-2\\tabcolsep}"));
        assert!(tex.contains("R{\\dimexpr 0.7500\\linewidth-2\\tabcolsep}"));
    }

    #[test]
    fn test_cell_colors_applied_skipping_white() {
        let tex = LatexTable::with_metadata(grid(&[&["A", "B"], &["1", "2"]]), n2_metadata())
            .render("chart.tex", "Chart")
            .unwrap();

        assert!(tex.contains("\\cellcolor[rgb]{0.85,0.85,0.85} A"));
        // White-background cells carry no directive.
        assert!(!tex.contains("\\cellcolor[rgb]{1,1,1}"));
    }

    #[test]
    fn test_small_block_and_closing_rule() {
        let tex = LatexTable::with_metadata(grid(&[&["A", "B"], &["1", "2"]]), n2_metadata())
            .render("chart.tex", "Chart")
            .unwrap();

        let lines: Vec<&str> = tex.lines().collect();
        let end = lines
            .iter()
            .position(|l| l.contains("\\end{longtable}"))
            .unwrap();
        assert_eq!(lines[end - 1], "\\bottomrule");
        assert_eq!(lines[end + 1], "\\end{small}");
    }

    #[test]
    fn test_preamble_packages_listed_in_header() {
        let tex = LatexTable::with_metadata(grid(&[&["A", "B"], &["1", "2"]]), n2_metadata())
            .render("chart.tex", "Chart")
            .unwrap();

        assert!(tex.contains("% \\usepackage{booktabs}"));
        assert!(tex.contains("% \\usepackage{longtable}"));
        assert!(tex.contains("% \\newcolumntype{L}[1]"));
        assert!(tex.contains("% \\newcommand{\\tableskip}{5pt}"));
    }

    #[test]
    fn test_degenerate_widths_surface_as_error() {
        let metadata = FormatMetadata {
            formats: Some(vec![vec![
                CellFormat::default(),
                CellFormat::default(),
            ]]),
            col_widths: Some(vec![0.0, 0.0]),
        };
        let err = LatexTable::with_metadata(grid(&[&["A", "B"]]), metadata)
            .render("t.tex", "Bad")
            .unwrap_err();
        assert!(matches!(err, TableError::DegenerateWidths { .. }));
    }
}

// ============================================================================
// Row grouping second pass
// ============================================================================

mod row_grouping {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grouping_after_headerless_render() {
        let opts = TableOptions {
            header: false,
            col_form: "c".to_string(),
            ..Default::default()
        };
        let mut sink = MemoryTexSink::new();
        LatexTable::new(grid(&[&["a", "b"], &["c", "d"], &["e", "f"]]))
            .with_options(opts)
            .write_to(&mut sink, "chart.tex", "AOCS N2 chart")
            .unwrap();
        group_rows_in_sink(&mut sink, "chart.tex").unwrap();

        let tex = sink.read_file("chart.tex").unwrap();
        assert!(tex.contains("\\begin{tabular}{cc}"));
        // Every data row is followed by a spacing directive; the bottom
        // rule and everything after it are untouched.
        let spacing = tex
            .lines()
            .filter(|l| *l == "\\addlinespace[\\tableskip]")
            .count();
        assert_eq!(spacing, 3);
        assert!(!tex.contains("\\bottomrule\n\\addlinespace"));
    }

    #[test]
    fn test_grouping_without_rules_is_an_error() {
        let err = group_table_rows("no rules in sight\n").unwrap_err();
        assert!(err.to_string().contains("toprule"));
    }

    #[test]
    fn test_grouping_missing_file_is_io_error() {
        let mut sink = MemoryTexSink::new();
        let err = group_rows_in_sink(&mut sink, "absent.tex").unwrap_err();
        assert!(matches!(err, TableError::IoError { .. }));
    }
}
