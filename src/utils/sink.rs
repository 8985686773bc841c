//! Text sinks for generated table files
//!
//! Rendering produces a string; the sink is where it lands. The row-grouping
//! pass reads a previously written file back, transforms it, and writes it
//! again, so sinks support both directions.
//!
//! Implementations:
//! - `StdTexSink`: Uses std::fs for real file system access
//! - `MemoryTexSink`: In-memory storage (testing)

use std::collections::HashMap;
use std::fs;

/// Trait for writing and reading back generated `.tex` files
pub trait TexSink {
    /// Write a file, replacing any previous contents
    fn write_file(&mut self, path: &str, content: &str) -> Result<(), SinkError>;

    /// Read a previously written file's contents
    fn read_file(&self, path: &str) -> Result<String, SinkError>;

    /// Check if a file exists
    fn file_exists(&self, path: &str) -> bool;
}

/// Error type for sink operations
#[derive(Debug, Clone)]
pub enum SinkError {
    NotFound(String),
    ReadError(String),
    WriteError(String),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::NotFound(path) => write!(f, "File not found: {}", path),
            SinkError::ReadError(msg) => write!(f, "Read error: {}", msg),
            SinkError::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl std::error::Error for SinkError {}

/// Standard filesystem sink. `fs::write` and `fs::read_to_string` open and
/// close the file within the call, so the handle is released on every path.
#[derive(Debug, Default)]
pub struct StdTexSink;

impl StdTexSink {
    pub fn new() -> Self {
        StdTexSink
    }
}

impl TexSink for StdTexSink {
    fn write_file(&mut self, path: &str, content: &str) -> Result<(), SinkError> {
        fs::write(path, content).map_err(|e| SinkError::WriteError(e.to_string()))
    }

    fn read_file(&self, path: &str) -> Result<String, SinkError> {
        if !std::path::Path::new(path).exists() {
            return Err(SinkError::NotFound(path.to_string()));
        }
        fs::read_to_string(path).map_err(|e| SinkError::ReadError(e.to_string()))
    }

    fn file_exists(&self, path: &str) -> bool {
        std::path::Path::new(path).exists()
    }
}

/// Memory-based sink (for testing)
#[derive(Debug, Default)]
pub struct MemoryTexSink {
    files: HashMap<String, String>,
}

impl MemoryTexSink {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Number of files written so far
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl TexSink for MemoryTexSink {
    fn write_file(&mut self, path: &str, content: &str) -> Result<(), SinkError> {
        self.files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<String, SinkError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SinkError::NotFound(path.to_string()))
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}
