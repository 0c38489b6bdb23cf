use crate::eol_analysis::domain::SupportRequest;
use crate::ports::outbound::SupportRequestSink;
use crate::shared::error::ReportError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// One line of the support request log
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoggedSupportRequest<'a> {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    request: &'a SupportRequest,
}

/// Appends submitted support requests to a JSON-lines file
///
/// The file is created on first use. Each request gets a fresh v4 id and a
/// UTC submission timestamp.
pub struct JsonLinesSupportRequestSink {
    path: PathBuf,
}

impl JsonLinesSupportRequestSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn write_error(&self, details: impl Into<String>) -> ReportError {
        ReportError::FileWriteError {
            path: self.path.clone(),
            details: details.into(),
        }
    }

    /// Checks the link itself, so a dangling link is rejected too
    fn validate_not_symlink(&self) -> Result<()> {
        match fs::symlink_metadata(&self.path) {
            Ok(metadata) if metadata.is_symlink() => Err(ReportError::SecurityError {
                path: self.path.clone(),
                reason: "append operations on symbolic links are not allowed".to_string(),
                hint: "Point support_log to the real file instead of a link".to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

impl SupportRequestSink for JsonLinesSupportRequestSink {
    fn submit(&self, request: &SupportRequest) -> Result<()> {
        self.validate_not_symlink()?;

        let entry = LoggedSupportRequest {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            request,
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e.to_string()))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.write_error(e.to_string()))?;

        Ok(())
    }
}
