//! I/O boundary: source discovery and artifact sinks.

pub mod sink;
pub mod walker;

pub use sink::{ArtifactSink, FileSink, MemorySink};
pub use walker::SourceWalker;

use crate::errors::{Result, UnwrapGenError};
use std::fs;
use std::path::Path;

/// Read a source file as UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| UnwrapGenError::io_with_path(format!("Failed to read file: {e}"), path, e))
}
