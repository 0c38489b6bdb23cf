use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest dataset document accepted (100 MB)
pub const MAX_DATASET_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {} operation: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point to the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a file after checking it is a regular, non-symlinked file within
/// `max_size` bytes
///
/// # Arguments
/// * `path` - File to read
/// * `max_size` - Maximum allowed size in bytes
///
/// # Errors
/// - The file is a symbolic link or not a regular file
/// - The file is larger than `max_size`
/// - The file cannot be read or is not valid UTF-8
pub fn read_checked_file(path: &Path, max_size: u64) -> Result<String> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(ReportError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                max_size
            ),
            hint: "Split the dataset or remove unused ecosystems".to_string(),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        ReportError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
