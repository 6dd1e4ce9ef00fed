//! Source file discovery.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Suffixes of previously generated file stems. Skipped during discovery so
/// a second pass never re-scans its own output.
const GENERATED_STEM_SUFFIXES: [&str; 2] = ["_unwrapped", "_unwrapped_error"];

pub struct SourceWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl SourceWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Collect all `.rs` files under the root, sorted for determinism.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        if ext != "rs" {
            return false;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if GENERATED_STEM_SUFFIXES
                .iter()
                .any(|suffix| stem.ends_with(suffix))
            {
                return false;
            }
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}
