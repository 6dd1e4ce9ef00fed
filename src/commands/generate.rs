//! The `generate` command: configure a pass, pick a sink, run it.

use crate::generate::{generate, GenerateConfig};
use crate::io::sink::{FileSink, MemorySink};
use anyhow::Result;
use std::path::PathBuf;

pub struct GenerateOptions {
    pub path: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub ignore_patterns: Vec<String>,
    pub dry_run: bool,
}

pub fn handle_generate(options: GenerateOptions) -> Result<()> {
    let config = GenerateConfig {
        root: options.path,
        out_dir: options.out_dir,
        ignore_patterns: options.ignore_patterns,
    };

    let report = if options.dry_run {
        let sink = MemorySink::new();
        let report = generate(&config, &sink)?;
        for (path, content) in sink.written() {
            println!("would write {} ({} bytes)", path.display(), content.len());
        }
        report
    } else {
        generate(&config, &FileSink::new())?
    };

    println!(
        "scanned {} files, processed {} marked impls, wrote {} artifacts",
        report.files_scanned,
        report.impls_processed,
        report.artifacts_written.len()
    );
    Ok(())
}
