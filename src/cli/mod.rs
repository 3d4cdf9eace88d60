//! Command-line interface module

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ExtractionError, ExtractionResult};
use crate::extraction::limits::parse_size;
use crate::extraction::{ExtractionConfig, ExtractionStatistics, FileOutcome};
use crate::formatter::OutputFormat;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "extract-methods")]
#[command(about = "Extract Java method declarations from a source tree into a JSON array")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Root directory of the source tree
    #[arg()]
    pub root: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// File name suffix of source files
    #[arg(long, default_value = ".java")]
    pub suffix: String,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum directory depth below the root
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Visit files in file name order for reproducible output
    #[arg(long)]
    pub sorted: bool,

    /// Skip source files above this size (e.g., 10MB)
    #[arg(long)]
    pub max_file_size: Option<String>,

    /// Write a valid JSON array: no trailing comma, no quote pre-escaping
    #[arg(long)]
    pub strict_json: bool,

    /// Output extraction statistics
    #[arg(long)]
    pub stats: bool,

    /// Show a progress spinner
    #[arg(long)]
    pub progress: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress per-file diagnostics
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub extraction_config: ExtractionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ExtractionResult<Self> {
        let extraction_config = Self::create_extraction_config(&args)?;

        Ok(Self {
            args,
            extraction_config,
        })
    }

    /// Create extraction configuration from CLI arguments
    fn create_extraction_config(args: &Args) -> ExtractionResult<ExtractionConfig> {
        let max_file_size = args
            .max_file_size
            .as_deref()
            .map(parse_size)
            .transpose()
            .map_err(ExtractionError::configuration)?;

        let format = if args.strict_json {
            OutputFormat::Strict
        } else {
            OutputFormat::Legacy
        };

        let config = ExtractionConfig::new(&args.root, &args.output)
            .with_suffix(args.suffix.clone())
            .with_follow_links(args.follow_links)
            .with_max_depth(args.max_depth)
            .with_sorted(args.sorted)
            .with_max_file_size(max_file_size)
            .with_format(format);

        config.validate().map_err(ExtractionError::configuration)?;

        Ok(config)
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Log filter directive for the configured verbosity
    pub fn log_directive(&self) -> &'static str {
        if self.is_verbose() {
            "extract_methods=debug"
        } else {
            "warn"
        }
    }
}

/// Prints per-file diagnostics and the final summary
pub struct ConsoleReporter {
    quiet: bool,
    progress: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(config: &CliConfig) -> Self {
        let progress = config.args.progress.then(CliUtils::create_spinner);
        Self {
            quiet: config.is_quiet(),
            progress,
        }
    }

    /// Report one processed file
    pub fn file_done(&self, path: &Path, outcome: &FileOutcome) {
        if let Some(pb) = &self.progress {
            pb.set_message(path.display().to_string());
            pb.inc(1);
        }

        if let FileOutcome::Failed(failure) = outcome {
            if !self.quiet {
                self.println(&failure.diagnostic(path));
            }
        }
    }

    /// Print the final counts
    pub fn finish(&self, stats: &ExtractionStatistics, want_stats: bool) {
        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }

        println!("Success: {}", stats.files_parsed);
        println!("Fail: {}", stats.files_failed);

        if want_stats {
            output_statistics(stats);
        }
    }

    fn println(&self, line: &str) {
        match &self.progress {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

fn output_statistics(stats: &ExtractionStatistics) {
    println!("\n{}", console::style("Extraction Statistics:").bold());
    println!("{}", stats.summary());
    println!(
        "Started: {}",
        stats.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Files seen: {}", stats.total_files());
    println!("Methods written: {}", stats.records_written);
    if stats.write_failures > 0 {
        println!(
            "Write failures: {}",
            console::style(stats.write_failures).red()
        );
    }
    println!(
        "Processing time: {}",
        CliUtils::format_duration(Duration::from_millis(stats.processing_time_ms))
    );
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a spinner for file processing; the total is unknown up front
    pub fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} files {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", console::style("✗").red(), message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ExtractionError) {
    CliUtils::show_error(&error.user_message());

    match error {
        ExtractionError::Traversal(_) => {
            eprintln!("\nTip: check that the root directory exists and is readable");
        }
        ExtractionError::Configuration { .. } => {
            eprintln!("\nTry 'extract-methods --help' for usage information.");
        }
        _ => {}
    }
}
