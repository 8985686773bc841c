//! Per-cell formatting metadata for table generation

use crate::data::constants::ALIGN_COLUMN_TYPES;

/// Background color with components in the 0-1 range, as delivered by
/// spreadsheet formatting metadata
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// The default canvas color; cells with a white background get no
    /// color directive at all.
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    pub fn is_white(&self) -> bool {
        *self == Rgb::WHITE
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

/// Horizontal cell alignment
///
/// Spreadsheet metadata delivers uppercase tokens (`LEFT`, `CENTER`,
/// `RIGHT`); anything else is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
    /// Unrecognized token, passed through unchanged
    Other(String),
}

impl HAlign {
    /// Parse from a spreadsheet alignment token
    pub fn from_sheet(token: &str) -> Self {
        match token {
            "LEFT" => HAlign::Left,
            "CENTER" => HAlign::Center,
            "RIGHT" => HAlign::Right,
            other => HAlign::Other(other.to_string()),
        }
    }

    /// The token as spreadsheet metadata spells it
    pub fn sheet_token(&self) -> &str {
        match self {
            HAlign::Left => "LEFT",
            HAlign::Center => "CENTER",
            HAlign::Right => "RIGHT",
            HAlign::Other(s) => s.as_str(),
        }
    }

    /// Column type used in width-directive column specs: the fixed-width
    /// `L`/`C`/`R` types declared in the preamble, or the raw token when
    /// it is not a recognized alignment.
    pub fn column_token(&self) -> &str {
        let raw = self.sheet_token();
        ALIGN_COLUMN_TYPES.get(raw).copied().unwrap_or(raw)
    }
}

/// Per-cell formatting record: background color plus horizontal alignment.
/// Absence of a record means no color and default alignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellFormat {
    pub background: Rgb,
    pub align: HAlign,
}

impl CellFormat {
    pub fn new(background: Rgb, align: HAlign) -> Self {
        CellFormat { background, align }
    }

    /// The `\cellcolor` directive prefixed to the cell's text, or an empty
    /// string for a white background (white is the canvas default and would
    /// be redundant markup).
    pub fn color_prefix(&self) -> String {
        if self.background.is_white() {
            return String::new();
        }
        format!(
            "\\cellcolor[rgb]{{{},{},{}}} ",
            self.background.r, self.background.g, self.background.b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_white_background_omits_directive() {
        let fmt = CellFormat::new(Rgb::WHITE, HAlign::Left);
        assert_eq!(fmt.color_prefix(), "");
    }

    #[test]
    fn test_nonwhite_background_emits_components() {
        let fmt = CellFormat::new(Rgb::new(0.9, 0.9, 0.9), HAlign::Left);
        assert_eq!(fmt.color_prefix(), "\\cellcolor[rgb]{0.9,0.9,0.9} ");
    }

    #[test]
    fn test_near_white_is_not_white() {
        let fmt = CellFormat::new(Rgb::new(1.0, 1.0, 0.99), HAlign::Center);
        assert!(!fmt.color_prefix().is_empty());
    }

    #[test]
    fn test_align_round_trip() {
        assert_eq!(HAlign::from_sheet("LEFT"), HAlign::Left);
        assert_eq!(HAlign::from_sheet("CENTER"), HAlign::Center);
        assert_eq!(HAlign::from_sheet("RIGHT"), HAlign::Right);
        assert_eq!(HAlign::Left.column_token(), "L");
        assert_eq!(HAlign::Center.column_token(), "C");
        assert_eq!(HAlign::Right.column_token(), "R");
    }

    #[test]
    fn test_unrecognized_align_passes_through() {
        let a = HAlign::from_sheet("JUSTIFY");
        assert_eq!(a, HAlign::Other("JUSTIFY".to_string()));
        assert_eq!(a.column_token(), "JUSTIFY");
    }
}
