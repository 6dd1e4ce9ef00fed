//! Generation driver: discovery, extraction, emission, writes.
//!
//! One sequential pass: discover source files (sorted), parse each with
//! `syn`, extract marked impls, render the error artifact then the wrapper,
//! and write both through the caller-supplied [`ArtifactSink`]. Any failure
//! aborts the whole pass; running twice over unchanged input produces
//! byte-identical artifacts.

use crate::emit;
use crate::errors::UnwrapGenError;
use crate::extract;
use crate::io::sink::ArtifactSink;
use crate::io::walker::SourceWalker;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct GenerateConfig {
    /// Root path to scan for marked impl blocks.
    pub root: PathBuf,
    /// Output directory; defaults to each source file's own directory.
    pub out_dir: Option<PathBuf>,
    /// Glob patterns excluded from the scan.
    pub ignore_patterns: Vec<String>,
}

/// Summary of one generation pass.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files_scanned: usize,
    pub impls_processed: usize,
    pub artifacts_written: Vec<PathBuf>,
}

/// Run one generation pass over the configured root.
pub fn generate(config: &GenerateConfig, sink: &dyn ArtifactSink) -> Result<GenerationReport> {
    let files = SourceWalker::new(config.root.clone())
        .with_ignore_patterns(config.ignore_patterns.clone())
        .walk()
        .with_context(|| format!("discovering sources under {}", config.root.display()))?;

    log::debug!(
        "discovered {} source files under {} (sink: {})",
        files.len(),
        config.root.display(),
        sink.description()
    );

    let mut report = GenerationReport::default();
    for path in files {
        report.files_scanned += 1;
        generate_for_file(config, sink, &path, &mut report)
            .with_context(|| format!("generating for {}", path.display()))?;
    }
    Ok(report)
}

fn generate_for_file(
    config: &GenerateConfig,
    sink: &dyn ArtifactSink,
    path: &Path,
    report: &mut GenerationReport,
) -> Result<()> {
    let content = crate::io::read_file(path)?;
    let ast = syn::parse_file(&content)
        .map_err(|e| UnwrapGenError::parse(path, e.to_string()))?;

    let impls = extract::extract_file(&ast)?;
    if impls.is_empty() {
        return Ok(());
    }

    let stem = module_stem(path)?;
    let out_dir = match &config.out_dir {
        Some(dir) => dir.clone(),
        None => path.parent().unwrap_or(Path::new("")).to_path_buf(),
    };

    for marked in impls {
        report.impls_processed += 1;
        for artifact in emit::render_artifacts(&marked, &stem)? {
            let out_path = out_dir.join(&artifact.file_name);
            sink.write(&out_path, &artifact.content)?;
            log::info!("wrote {}", out_path.display());
            report.artifacts_written.push(out_path);
        }
    }
    Ok(())
}

fn module_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            UnwrapGenError::validation(format!(
                "source path {} has no usable file stem",
                path.display()
            ))
            .into()
        })
}
