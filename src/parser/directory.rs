use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::parser::filter::is_source_file;

/// Options controlling source file discovery
#[derive(Debug, Clone, PartialEq)]
pub struct CollectOptions {
    /// File name suffix to keep
    pub suffix: String,
    /// Descend into symlinked directories
    pub follow_links: bool,
    /// Maximum directory depth below the root
    pub max_depth: Option<usize>,
    /// Visit directory entries sorted by file name
    pub sorted: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            suffix: ".java".to_string(),
            follow_links: false,
            max_depth: None,
            sorted: false,
        }
    }
}

/// Lazily find source files under `root`.
///
/// Traversal errors are yielded as-is; the caller decides whether they abort.
pub fn source_files(
    root: &Path,
    options: &CollectOptions,
) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> {
    let mut walker = WalkDir::new(root).follow_links(options.follow_links);
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }
    if options.sorted {
        walker = walker.sort_by_file_name();
    }

    let suffix = options.suffix.clone();
    walker.into_iter().filter_map(move |entry| match entry {
        Ok(entry) if is_source_file(entry.path(), &suffix) => Some(Ok(entry.into_path())),
        Ok(_) => None,
        Err(e) => Some(Err(e)),
    })
}
