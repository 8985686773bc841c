//! Data layer - Static LaTeX fragments and lookup tables
//!
//! This module contains all static data used during table generation:
//! - Reserved characters and break markers
//! - Booktabs rule and spacing commands
//! - Preamble package lines for the generated file header
//! - Spreadsheet alignment token mappings

pub mod constants;

// Re-export commonly used items
pub use constants::{
    ALIGN_COLUMN_TYPES, BOTTOM_RULE, LINE_BREAK, MID_RULE, PREAMBLE_DEFS, PREAMBLE_PACKAGES,
    RESERVED_CHARS, ROW_SPACING, SUBTABLE_BEGIN, SUBTABLE_END, TOP_RULE,
};
