use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unwrapgen")]
#[command(
    about = "Generates unwrap-style wrappers for Either-returning service methods",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a source tree and write generated wrapper artifacts
    Generate {
        /// Path to scan for marked impl blocks
        path: PathBuf,

        /// Directory to write artifacts into (defaults to each source file's directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Glob patterns to exclude from the scan
        #[arg(long = "ignore", value_delimiter = ',')]
        ignore_patterns: Option<Vec<String>>,

        /// Render artifacts and report what would be written, without writing
        #[arg(long)]
        dry_run: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["unwrapgen", "generate", "src"]).unwrap();
        let Commands::Generate {
            path,
            out_dir,
            ignore_patterns,
            dry_run,
            verbosity,
        } = cli.command;
        assert_eq!(path, PathBuf::from("src"));
        assert!(out_dir.is_none());
        assert!(ignore_patterns.is_none());
        assert!(!dry_run);
        assert_eq!(verbosity, 0);
    }

    #[test]
    fn generate_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "unwrapgen",
            "generate",
            "src",
            "--out-dir",
            "gen",
            "--ignore",
            "**/tests/**,**/fixtures/**",
            "--dry-run",
            "-vv",
        ])
        .unwrap();
        let Commands::Generate {
            out_dir,
            ignore_patterns,
            dry_run,
            verbosity,
            ..
        } = cli.command;
        assert_eq!(out_dir, Some(PathBuf::from("gen")));
        assert_eq!(
            ignore_patterns,
            Some(vec![
                "**/tests/**".to_string(),
                "**/fixtures/**".to_string()
            ])
        );
        assert!(dry_run);
        assert_eq!(verbosity, 2);
    }
}
