//! Extraction driver: walks the source tree and streams records to a sink

use crate::error::{ExtractionError, ExtractionResult, ParseError};
use crate::extraction::config::ExtractionConfig;
use crate::extraction::limits;
use crate::extraction::stats::ExtractionStatistics;
use crate::formatter::{JsonArrayWriter, RecordSink};
use crate::parser::directory::source_files;
use crate::parser::{JavaSourceParser, ParsedFile};
use std::fs::File;
use std::path::Path;
use std::time::Instant;

/// Why a single file contributed no records
#[derive(Debug)]
pub enum FileFailure {
    /// The file was read but contains syntax errors
    Unparseable(ParseError),
    /// The file could not be read
    Unreadable(ExtractionError),
}

impl From<ExtractionError> for FileFailure {
    fn from(error: ExtractionError) -> Self {
        match error {
            ExtractionError::Parse(err) => Self::Unparseable(err),
            other => Self::Unreadable(other),
        }
    }
}

impl FileFailure {
    /// Console line reported for the failed file
    pub fn diagnostic(&self, path: &Path) -> String {
        match self {
            Self::Unparseable(_) => format!("Error in {}", path.display()),
            Self::Unreadable(_) => format!("Failed to parse {}", path.display()),
        }
    }
}

/// Result of processing one source file
#[derive(Debug)]
pub enum FileOutcome {
    /// Parsed; `records` were written and `write_failures` could not be
    Parsed {
        records: usize,
        write_failures: usize,
    },
    Failed(FileFailure),
}

/// Main extraction engine
pub struct ExtractionEngine {
    config: ExtractionConfig,
    parser: JavaSourceParser,
}

impl ExtractionEngine {
    /// Create an engine; the parser is configured once for the whole run
    pub fn new(config: ExtractionConfig) -> ExtractionResult<Self> {
        config.validate().map_err(ExtractionError::configuration)?;
        let parser = JavaSourceParser::new()?;
        Ok(Self { config, parser })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Process every source file under the configured root.
    ///
    /// `observer` sees each path with its outcome as soon as the file is done.
    /// A traversal error aborts the run. Record write errors are counted and
    /// the run continues.
    pub fn run<S, F>(&mut self, sink: &mut S, mut observer: F) -> ExtractionResult<ExtractionStatistics>
    where
        S: RecordSink + ?Sized,
        F: FnMut(&Path, &FileOutcome),
    {
        let start_time = Instant::now();
        let mut stats = ExtractionStatistics::new();

        sink.begin().map_err(ExtractionError::Write)?;

        let options = self.config.collect_options();
        for path in source_files(&self.config.root, &options) {
            let path = path?;
            let outcome = self.process_file(&path, sink);
            observer(&path, &outcome);
            stats.record(&outcome);
        }

        sink.finish().map_err(ExtractionError::Write)?;

        stats.set_elapsed(start_time.elapsed());
        tracing::debug!(
            parsed = stats.files_parsed,
            failed = stats.files_failed,
            records = stats.records_written,
            "extraction finished"
        );
        Ok(stats)
    }

    /// Parse one file and stream its methods into `sink`
    pub fn process_file<S>(&mut self, path: &Path, sink: &mut S) -> FileOutcome
    where
        S: RecordSink + ?Sized,
    {
        let parsed = match self.parse(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(path = %path.display(), "{}", e.user_message());
                return FileOutcome::Failed(FileFailure::from(e));
            }
        };

        let mut records = 0;
        let mut write_failures = 0;
        for record in parsed.methods() {
            match sink.write_record(&record) {
                Ok(()) => records += 1,
                Err(e) => {
                    tracing::error!(
                        path = %path.display(),
                        method = record.name,
                        "failed to write record: {e}"
                    );
                    write_failures += 1;
                }
            }
        }

        tracing::debug!(path = %path.display(), records, "extracted methods");
        FileOutcome::Parsed {
            records,
            write_failures,
        }
    }

    fn parse(&mut self, path: &Path) -> ExtractionResult<ParsedFile> {
        limits::check_file_size_before_read(path, self.config.max_file_size)?;
        self.parser.parse_file(path)
    }
}

/// Extract methods into the configured output file
pub fn extract_to_file<F>(config: ExtractionConfig, observer: F) -> ExtractionResult<ExtractionStatistics>
where
    F: FnMut(&Path, &FileOutcome),
{
    let mut engine = ExtractionEngine::new(config)?;

    let output = &engine.config().output;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(ExtractionError::Write)?;
    }
    let file = File::create(output).map_err(ExtractionError::Write)?;

    let mut writer = JsonArrayWriter::new(file, engine.config().format);
    engine.run(&mut writer, observer)
}
