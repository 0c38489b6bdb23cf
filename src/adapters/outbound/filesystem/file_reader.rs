use crate::eol_analysis::domain::Dataset;
use crate::ports::outbound::DatasetRepository;
use crate::shared::error::ReportError;
use crate::shared::security::{read_checked_file, MAX_DATASET_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// FileSystemDatasetReader adapter for loading the dataset from a local file
///
/// Reads through `shared::security`: symlinks, non-regular files and files
/// over 100 MB are rejected before parsing.
pub struct FileSystemDatasetReader {
    path: PathBuf,
}

impl FileSystemDatasetReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_dataset(&self) -> Result<Dataset> {
        if !self.path.exists() {
            return Err(ReportError::DatasetNotFound {
                path: self.path.clone(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Specify the dataset with --data <PATH|URL> or set data_source in eol-report.config.yml.",
                    self.path.display()
                ),
            }
            .into());
        }

        let content = read_checked_file(&self.path, MAX_DATASET_SIZE)?;

        Dataset::from_json(&content).map_err(|e| {
            ReportError::DatasetParseError {
                location: self.path.display().to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl DatasetRepository for FileSystemDatasetReader {
    async fn load_dataset(&self) -> Result<Dataset> {
        self.read_dataset()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
