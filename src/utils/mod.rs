//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Text sinks for generated files

pub mod error;
pub mod sink;

// Re-export commonly used items
pub use error::{TableError, TableResult};
pub use sink::{MemoryTexSink, SinkError, StdTexSink, TexSink};
