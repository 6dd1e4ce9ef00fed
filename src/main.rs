use anyhow::Result;
use clap::Parser;
use unwrapgen::cli::{Cli, Commands};
use unwrapgen::commands::generate::GenerateOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            path,
            out_dir,
            ignore_patterns,
            dry_run,
            verbosity,
        } => {
            init_logging(verbosity);
            unwrapgen::commands::generate::handle_generate(GenerateOptions {
                path,
                out_dir,
                ignore_patterns: ignore_patterns.unwrap_or_default(),
                dry_run,
            })
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
