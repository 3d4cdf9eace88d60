//! Java source reading and parsing module

pub mod directory;
pub mod filter;

use crate::error::{ExtractionError, ExtractionResult, ParseError, ParseResult};
use crate::extraction::extractor::MethodDeclarations;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// A source file read from disk
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    /// Read a source file as UTF-8 text.
    ///
    /// Invalid byte sequences are replaced with U+FFFD; only I/O errors fail.
    pub fn read(path: &Path) -> ExtractionResult<Self> {
        let bytes =
            std::fs::read(path).map_err(|e| ExtractionError::file_read(path.to_path_buf(), e))?;
        Ok(Self {
            path: path.to_path_buf(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// A source file together with its syntax tree
pub struct ParsedFile {
    pub source: SourceFile,
    pub tree: Tree,
}

impl ParsedFile {
    /// Method declarations of this file in pre-order
    pub fn methods(&self) -> MethodDeclarations<'_, '_> {
        MethodDeclarations::new(self.tree.root_node(), &self.source.content)
    }
}

/// Java parser configured once and reused for every file of a run
pub struct JavaSourceParser {
    parser: Parser,
}

impl JavaSourceParser {
    /// Create a parser with the Java grammar loaded
    pub fn new() -> ExtractionResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| ExtractionError::grammar(format!("Failed to load Java grammar: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse Java source text.
    ///
    /// tree-sitter always recovers, so a tree holding any ERROR or MISSING
    /// node is reported as a failure.
    pub fn parse(&mut self, source: &str) -> ParseResult<Tree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new("tree-sitter parse returned None".to_string(), None))?;

        let root = tree.root_node();
        if root.has_error() {
            let location = first_error(root).map(|node| {
                let point = node.start_position();
                (point.row + 1, point.column + 1)
            });
            return Err(ParseError::new("Syntax error".to_string(), location));
        }

        Ok(tree)
    }

    /// Read and parse one file
    pub fn parse_file(&mut self, path: &Path) -> ExtractionResult<ParsedFile> {
        let source = SourceFile::read(path)?;
        let tree = self.parse(&source.content)?;
        Ok(ParsedFile { source, tree })
    }
}

/// Find the first ERROR or MISSING node in document order
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node
            .children(&mut cursor)
            .filter(|child| child.has_error() || child.is_missing())
            .collect();
        stack.extend(children.into_iter().rev());
    }
    None
}
