use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use extract_methods::cli::{self, Args, CliConfig, ConsoleReporter};
use extract_methods::extraction::extract_to_file;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(2);
        }
    };

    // Set up logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let reporter = ConsoleReporter::new(&config);
    let result = extract_to_file(config.extraction_config.clone(), |path, outcome| {
        reporter.file_done(path, outcome)
    });

    match result {
        Ok(stats) => {
            reporter.finish(&stats, config.want_stats());
            Ok(())
        }
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(1);
        }
    }
}
