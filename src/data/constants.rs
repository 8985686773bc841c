//! Static LaTeX fragments shared across the table generation pipeline

use phf::phf_map;

/// Characters that must be backslash-escaped before they reach LaTeX.
///
/// `&` is the column separator, `$` opens math mode, `%` starts a comment;
/// any of them appearing raw inside a cell breaks the table.
pub const RESERVED_CHARS: [char; 3] = ['&', '$', '%'];

/// LaTeX line break, used both as the wrap marker inside sub-tables and as
/// the row terminator.
pub const LINE_BREAK: &str = "\\\\";

/// Opening of the nested single-column tabular used to force multi-line
/// content inside one grid cell.
pub const SUBTABLE_BEGIN: &str = "\\begin{tabular}[c]{@{}c@{}}";

/// Closing of the nested sub-table.
pub const SUBTABLE_END: &str = "\\end{tabular}";

/// Booktabs rules.
pub const TOP_RULE: &str = "\\toprule";
pub const MID_RULE: &str = "\\midrule";
pub const BOTTOM_RULE: &str = "\\bottomrule";

/// Vertical spacing inserted between grouped rows. `\tableskip` is defined
/// once in the document preamble so the spacing stays consistent across all
/// generated tables.
pub const ROW_SPACING: &str = "\\addlinespace[\\tableskip]";

/// Spreadsheet horizontal alignment tokens to the fixed-width column types
/// declared in the preamble. Unrecognized tokens pass through unchanged.
pub static ALIGN_COLUMN_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "LEFT" => "L",
    "CENTER" => "C",
    "RIGHT" => "R",
};

/// Packages the generated table relies on, listed as comments in the file
/// header so the document author can copy them into the preamble.
pub const PREAMBLE_PACKAGES: [&str; 6] = [
    "\\usepackage{array}",
    "\\usepackage{ragged2e}",
    "\\usepackage{xcolor, colortbl}",
    "\\usepackage{booktabs}",
    "\\usepackage{longtable}",
    "\\usepackage[font=small,textfont=it,labelfont=bf]{caption}",
];

/// Preamble definitions: fixed-width column types matching the alignment
/// tokens above, caption setup, and the row-grouping skip length.
pub const PREAMBLE_DEFS: [&str; 5] = [
    "\\newcolumntype{L}[1]{>{\\raggedright\\arraybackslash}p{#1}}",
    "\\newcolumntype{C}[1]{>{\\centering\\arraybackslash}p{#1}}",
    "\\newcolumntype{R}[1]{>{\\raggedleft\\arraybackslash}p{#1}}",
    "\\captionsetup{justification = centering}",
    "\\newcommand{\\tableskip}{5pt}",
];
