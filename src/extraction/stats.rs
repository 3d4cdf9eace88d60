//! Run statistics for extraction operations

use std::time::Duration;

use crate::extraction::engine::FileOutcome;

/// Totals accumulated over one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionStatistics {
    /// Files parsed without syntax errors
    pub files_parsed: usize,
    /// Files that could not be read or parsed
    pub files_failed: usize,
    /// Records written to the output
    pub records_written: usize,
    /// Records whose write failed
    pub write_failures: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// When the run started
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ExtractionStatistics {
    fn default() -> Self {
        Self {
            files_parsed: 0,
            files_failed: 0,
            records_written: 0,
            write_failures: 0,
            processing_time_ms: 0,
            started_at: chrono::Utc::now(),
        }
    }
}

impl ExtractionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file outcome into the totals
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Parsed {
                records,
                write_failures,
            } => {
                self.files_parsed += 1;
                self.records_written += records;
                self.write_failures += write_failures;
            }
            FileOutcome::Failed(_) => self.files_failed += 1,
        }
    }

    /// Total number of source files seen
    pub fn total_files(&self) -> usize {
        self.files_parsed + self.files_failed
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Extracted {} methods from {} files in {:.1}s ({} failed, {} write errors)",
            self.records_written,
            self.files_parsed,
            self.processing_time_ms as f32 / 1000.0,
            self.files_failed,
            self.write_failures
        )
    }
}
