//! Java method extractor
//!
//! Walks a source tree, parses every Java file with tree-sitter, and streams
//! each method declaration (name, source text, whether it has a body) into a
//! JSON array.

pub mod cli;
pub mod error;
pub mod extraction;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use error::{ExtractionError, ExtractionResult, ParseError};
pub use extraction::{
    extract_to_file, ExtractionConfig, ExtractionEngine, ExtractionStatistics, FileOutcome,
    MethodRecord,
};
pub use formatter::{JsonArrayWriter, OutputFormat, RecordSink};
pub use parser::JavaSourceParser;

/// Extract methods with the given configuration, discarding per-file outcomes
pub fn extract_methods(config: ExtractionConfig) -> ExtractionResult<ExtractionStatistics> {
    extract_to_file(config, |_, _| {})
}

/// Extract the methods of one Java source string
pub fn extract_source(source: &str) -> ExtractionResult<Vec<MethodRecord<'_>>> {
    let mut parser = JavaSourceParser::new()?;
    let tree = parser.parse(source)?;
    let records = extraction::MethodDeclarations::new(tree.root_node(), source).collect();
    Ok(records)
}
