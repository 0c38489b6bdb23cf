use crate::eol_analysis::domain::Dataset;
use crate::shared::Result;
use async_trait::async_trait;

/// DatasetRepository port for loading the report dataset
///
/// This port abstracts where the dataset document lives (local file,
/// HTTP endpoint). It is called once per session; the result is never
/// mutated afterwards.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Loads and parses the full dataset
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document cannot be found or fetched
    /// - The document is not a JSON array of ecosystems
    async fn load_dataset(&self) -> Result<Dataset>;

    /// Human readable location of the dataset, for progress messages
    fn location(&self) -> String;
}

#[async_trait]
impl<T: DatasetRepository + ?Sized> DatasetRepository for Box<T> {
    async fn load_dataset(&self) -> Result<Dataset> {
        (**self).load_dataset().await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
