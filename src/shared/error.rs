use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A "package not found" or "no packages found" page is a normal result and
/// exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report rendered (including empty or not-found pages)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (dataset, network, file I/O, incomplete support request, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for loading and presenting the report.
///
/// The view derivations never fail; these only cover infrastructure.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Dataset file not found: {path}\n\n💡 Hint: {suggestion}")]
    DatasetNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dataset: {location}\nDetails: {details}\n\n💡 Hint: The dataset must be a JSON array of ecosystems, each with an \"ecosystem\" key and a \"packages\" list")]
    DatasetParseError { location: String, details: String },

    #[error("Failed to fetch dataset: {url}\nDetails: {details}\n\n💡 Hint: Please check the URL and your internet connection")]
    DatasetFetchError { url: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_dataset_not_found_display() {
        let error = ReportError::DatasetNotFound {
            path: PathBuf::from("/srv/report/data.json"),
            suggestion: "Pass --data".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Dataset file not found"));
        assert!(display.contains("/srv/report/data.json"));
        assert!(display.contains("💡 Hint: Pass --data"));
    }

    #[test]
    fn test_dataset_parse_error_display() {
        let error = ReportError::DatasetParseError {
            location: "data.json".to_string(),
            details: "expected `[` at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse dataset: data.json"));
        assert!(display.contains("expected `[`"));
        assert!(display.contains("JSON array of ecosystems"));
    }

    #[test]
    fn test_dataset_fetch_error_display() {
        let error = ReportError::DatasetFetchError {
            url: "https://example.com/data.json".to_string(),
            details: "HTTP status 404 Not Found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to fetch dataset"));
        assert!(display.contains("404"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ReportError::FileWriteError {
            path: PathBuf::from("/srv/report/requests.jsonl"),
            details: "read-only file system".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.starts_with("Failed to write to file: /srv/report/requests.jsonl"));
        assert!(display.contains("Details: read-only file system"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ReportError::SecurityError {
            path: PathBuf::from("/srv/report/data.json"),
            reason: "read operations on symbolic links are not allowed".to_string(),
            hint: "Point to the real file instead of a link".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation: /srv/report/data.json"));
        assert!(display.ends_with("💡 Hint: Point to the real file instead of a link"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = ReportError::Validation {
            message: "data_source must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Validation error: data_source must not be empty"
        );
    }
}
