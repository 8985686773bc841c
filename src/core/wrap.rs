//! Greedy width-constrained wrapping of cell text
//!
//! Overlong cells are broken into multiple lines and wrapped in a nested
//! single-column tabular so they occupy one grid cell. The break heuristic
//! is a running modulo counter, not a true bin-packing wrap: a break is
//! inserted before the first word at which the counter wraps around a
//! column boundary. Words longer than the column width are never broken
//! mid-word, so such cells can exceed the nominal bound.

use crate::data::constants::{LINE_BREAK, SUBTABLE_BEGIN, SUBTABLE_END};

/// Wrap a cell to `max_width` columns.
///
/// Pre-existing sub-lines (embedded newlines surviving escaping in
/// line-preserving mode) are wrapped independently and rejoined with the
/// LaTeX line break. The result is wrapped in the sub-table construct only
/// if at least one break is present; a single short line stays a plain
/// string to keep the output small.
pub fn wrap_cell(text: &str, max_width: usize) -> String {
    let wrapped: Vec<String> = text
        .split('\n')
        .map(|line| wrap_line(line, max_width))
        .collect();
    let joined = wrapped.join(LINE_BREAK);

    if joined.contains(LINE_BREAK) {
        format!("{}{}{}", SUBTABLE_BEGIN, joined, SUBTABLE_END)
    } else {
        joined
    }
}

/// Insert break markers into a single line.
///
/// Words are accumulated as `len + 1` (the trailing space); a break goes in
/// front of the word whose cumulative count modulo `max_width` decreases
/// relative to the previous word, i.e. the word that crosses a column
/// boundary.
fn wrap_line(line: &str, max_width: usize) -> String {
    if max_width == 0 || line.chars().count() <= max_width {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 8);
    let mut prev_mod = 0usize;
    let mut cumulative = 0usize;

    for (i, word) in line.split(' ').enumerate() {
        cumulative += word.chars().count() + 1;
        let m = cumulative % max_width;

        if i > 0 {
            out.push(' ');
            if m < prev_mod {
                out.push_str(LINE_BREAK);
            }
        }
        out.push_str(word);
        prev_mod = m;
    }

    out
}
