use std::path::Path;

/// Return true if the path is a regular file whose name ends with `suffix`
pub fn is_source_file(path: &Path, suffix: &str) -> bool {
    has_suffix(path, suffix) && path.is_file()
}

/// Return true if the file name ends with `suffix`
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}
