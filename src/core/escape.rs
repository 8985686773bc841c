//! Escaping of LaTeX-reserved characters in cell text

use crate::data::constants::RESERVED_CHARS;

/// How embedded newlines in a cell are handled during escaping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Collapse a multi-line cell to a single line by dropping newlines
    #[default]
    Collapse,
    /// Keep newlines so the wrap stage can treat each sub-line independently
    PreserveLines,
}

/// Backslash-escape the LaTeX-reserved characters `&`, `$`, and `%`.
///
/// Not idempotent: text that already contains escaped sequences gets
/// double-escaped, so callers must escape each raw cell exactly once.
pub fn escape(text: &str, mode: EscapeMode) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\n' {
            if mode == EscapeMode::PreserveLines {
                out.push('\n');
            }
        } else if RESERVED_CHARS.contains(&c) {
            out.push('\\');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_reserved_chars() {
        assert_eq!(
            escape("R&D costs $40 (5%)", EscapeMode::Collapse),
            "R\\&D costs \\$40 (5\\%)"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("plain cell", EscapeMode::Collapse), "plain cell");
    }

    #[test]
    fn test_escape_collapses_newlines() {
        assert_eq!(escape("two\nlines", EscapeMode::Collapse), "twolines");
    }

    #[test]
    fn test_escape_preserves_newlines() {
        assert_eq!(
            escape("a & b\nc & d", EscapeMode::PreserveLines),
            "a \\& b\nc \\& d"
        );
    }

    #[test]
    fn test_escape_fixed_point_without_reserved_chars() {
        let s = "no special characters here";
        let once = escape(s, EscapeMode::Collapse);
        assert_eq!(escape(&once, EscapeMode::Collapse), once);
    }

    #[test]
    fn test_escape_double_escapes_when_reapplied() {
        let once = escape("a & b", EscapeMode::Collapse);
        let twice = escape(&once, EscapeMode::Collapse);
        assert_eq!(once, "a \\& b");
        assert_eq!(twice, "a \\\\& b");
        assert_ne!(once, twice);
    }
}
