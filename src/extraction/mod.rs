//! Method extraction module
//!
//! This module contains the tree visitor, the run driver, configuration, and statistics.

pub mod config;
pub mod engine;
pub mod extractor;
pub mod limits;
pub mod stats;

pub use config::ExtractionConfig;
pub use engine::{extract_to_file, ExtractionEngine, FileFailure, FileOutcome};
pub use extractor::{MethodDeclarations, MethodRecord};
pub use stats::ExtractionStatistics;
