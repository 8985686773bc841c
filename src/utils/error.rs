//! Error handling for table generation
//!
//! This module provides a unified error type and result type for all
//! table generation operations.

use std::fmt;

use crate::utils::sink::SinkError;

/// Table generation error type
#[derive(Debug, Clone)]
pub enum TableError {
    /// The input grid is empty or has rows of unequal length
    InvalidGrid { message: String },
    /// Column width metadata is empty or sums to zero
    DegenerateWidths { message: String },
    /// A post-processing pass did not find the rule line it keys on
    MissingRule { message: String },
    /// IO error (for sink operations)
    IoError { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidGrid { message } => {
                write!(f, "Invalid grid: {}", message)
            }
            TableError::DegenerateWidths { message } => {
                write!(f, "Degenerate column widths: {}", message)
            }
            TableError::MissingRule { message } => {
                write!(f, "Missing rule: {}", message)
            }
            TableError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<SinkError> for TableError {
    fn from(err: SinkError) -> Self {
        TableError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for table generation operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        TableError::InvalidGrid {
            message: message.into(),
        }
    }

    pub fn degenerate_widths(message: impl Into<String>) -> Self {
        TableError::DegenerateWidths {
            message: message.into(),
        }
    }

    pub fn missing_rule(message: impl Into<String>) -> Self {
        TableError::MissingRule {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_grid_display() {
        let err = TableError::invalid_grid("row 2 has 3 cells, expected 4");
        assert!(err.to_string().contains("Invalid grid"));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_degenerate_widths_display() {
        let err = TableError::degenerate_widths("widths sum to 0");
        assert!(err.to_string().contains("Degenerate column widths"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TableError = io.into();
        assert!(matches!(err, TableError::IoError { .. }));
        assert!(err.to_string().contains("gone"));
    }
}
