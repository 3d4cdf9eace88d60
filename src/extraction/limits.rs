use crate::error::{ExtractionError, ExtractionResult};
use std::path::Path;

/// Check the file size before reading so oversized sources are never loaded.
pub fn check_file_size_before_read(path: &Path, limit: Option<u64>) -> ExtractionResult<()> {
    let Some(limit) = limit else {
        return Ok(());
    };

    let metadata =
        std::fs::metadata(path).map_err(|e| ExtractionError::file_read(path.to_path_buf(), e))?;
    if metadata.len() > limit {
        return Err(ExtractionError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }

    Ok(())
}

/// Parse a size string such as "100MB", "1GB", "500KB", "64B" or "1024"
pub fn parse_size(limit: &str) -> Result<u64, String> {
    let limit = limit.trim().to_uppercase();
    let invalid = || format!("Invalid size: {}", limit);

    let (number, multiplier) = if let Some(size) = limit.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit.strip_suffix('B') {
        return size.trim().parse::<u64>().map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit.parse::<u64>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as u64)
}
