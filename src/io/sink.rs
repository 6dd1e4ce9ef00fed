//! Artifact write sinks.
//!
//! The generation driver never touches the file system directly; it writes
//! through an [`ArtifactSink`] capability. `FileSink` is the production
//! implementation, `MemorySink` backs tests and `--dry-run`.

use crate::errors::{Result, UnwrapGenError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Destination for rendered artifacts.
///
/// Implementations must be thread-safe (`Send + Sync`); per-class emission
/// is independent and could run in parallel.
pub trait ArtifactSink: Send + Sync {
    /// Write content to the given path, overwriting any previous artifact.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Description of the sink for log and error messages.
    fn description(&self) -> String;
}

/// File system sink. Creates parent directories as needed.
#[derive(Debug, Default, Clone)]
pub struct FileSink;

impl FileSink {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactSink for FileSink {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    UnwrapGenError::io_with_path(
                        format!("Failed to create output directory: {e}"),
                        parent,
                        e,
                    )
                })?;
            }
        }
        fs::write(path, content).map_err(|e| {
            UnwrapGenError::io_with_path(format!("Failed to write artifact: {e}"), path, e)
        })
    }

    fn description(&self) -> String {
        "fs".to_string()
    }
}

/// In-memory sink for testing and dry runs.
///
/// Captures writes in a thread-safe, deterministically ordered map that can
/// be inspected afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, keyed by path.
    pub fn written(&self) -> BTreeMap<PathBuf, String> {
        self.files.read().expect("RwLock poisoned").clone()
    }

    /// Content written to a single path, if any.
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.read().expect("RwLock poisoned").get(path).cloned()
    }

    /// Number of artifacts written.
    pub fn len(&self) -> usize {
        self.files.read().expect("RwLock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().expect("RwLock poisoned").is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.files
            .write()
            .expect("RwLock poisoned")
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_sink_writes_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.rs");

        let sink = FileSink::new();
        sink.write(&path, "pub struct X;").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "pub struct X;");
    }

    #[test]
    fn file_sink_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deep").join("out.rs");

        let sink = FileSink::new();
        sink.write(&path, "x").unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn file_sink_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.rs");

        let sink = FileSink::new();
        sink.write(&path, "first").unwrap();
        sink.write(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn memory_sink_records_writes() {
        let sink = MemorySink::new();
        sink.write(Path::new("a.rs"), "a").unwrap();
        sink.write(Path::new("b.rs"), "b").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.get(Path::new("a.rs")).unwrap(), "a");
    }

    #[test]
    fn memory_sink_overwrites() {
        let sink = MemorySink::new();
        sink.write(Path::new("a.rs"), "first").unwrap();
        sink.write(Path::new("a.rs"), "second").unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.get(Path::new("a.rs")).unwrap(), "second");
    }

    #[test]
    fn memory_sink_is_shared_across_clones() {
        let sink = MemorySink::new();
        let clone = sink.clone();

        clone.write(Path::new("a.rs"), "a").unwrap();

        assert!(!sink.is_empty());
    }
}
