//! Error types and handling infrastructure for method extraction

use std::fmt;
use std::path::PathBuf;

/// Main error type for extraction operations
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Failed to walk source tree: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file too large: {} ({size} bytes, limit: {limit} bytes)", .path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Output write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to load grammar: {message}")]
    Grammar { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ExtractionError {
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead { path, source }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn grammar(message: String) -> Self {
        Self::Grammar { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Traversal(err) => match err.path() {
                Some(path) => format!("Cannot walk {}: {}", path.display(), err),
                None => format!("Cannot walk source tree: {}", err),
            },
            Self::Parse(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "Java parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("Java parse error: {}", err.message)
                }
            }
            Self::FileTooLarge { path, size, limit } => format!(
                "{} is {} bytes, over the {} byte limit",
                path.display(),
                size,
                limit
            ),
            Self::Write(err) => format!("Could not write output: {}", err),
            _ => self.to_string(),
        }
    }
}

/// Java parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    /// 1-based line and column of the first syntax error
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for extraction operations
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
