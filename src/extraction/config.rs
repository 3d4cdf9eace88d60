//! Configuration options for method extraction

use crate::formatter::OutputFormat;
use crate::parser::directory::CollectOptions;
use std::path::PathBuf;

/// Extraction configuration options
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Root of the source tree to scan
    pub root: PathBuf,
    /// Output JSON file
    pub output: PathBuf,
    /// File name suffix of source files
    pub suffix: String,
    /// Descend into symlinked directories
    pub follow_links: bool,
    /// Maximum directory depth below the root
    pub max_depth: Option<usize>,
    /// Visit directory entries sorted by file name
    pub sorted: bool,
    /// Skip source files larger than this many bytes
    pub max_file_size: Option<u64>,
    /// Output framing
    pub format: OutputFormat,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("output.json"),
            suffix: ".java".to_string(),
            follow_links: false,
            max_depth: None,
            sorted: false,
            max_file_size: None,
            format: OutputFormat::Legacy,
        }
    }
}

impl ExtractionConfig {
    /// Create a configuration for a root and output path with default values
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    /// Set the source file suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Follow symlinked directories
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum traversal depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sort directory entries for a stable output order
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Set per-file size limit
    pub fn with_max_file_size(mut self, limit: Option<u64>) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Set output framing
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// File discovery options derived from this configuration
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            suffix: self.suffix.clone(),
            follow_links: self.follow_links,
            max_depth: self.max_depth,
            sorted: self.sorted,
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.suffix.is_empty() {
            return Err("Suffix must not be empty".to_string());
        }

        if let Some(depth) = self.max_depth {
            if depth == 0 {
                return Err("Max depth must be at least 1".to_string());
            }
        }

        if self.max_file_size == Some(0) {
            return Err("Max file size must be greater than 0".to_string());
        }

        if self.output.as_os_str().is_empty() {
            return Err("Output path must not be empty".to_string());
        }

        Ok(())
    }
}
