use crate::adapters::outbound::filesystem::FileSystemDatasetReader;
use crate::adapters::outbound::network::HttpDatasetClient;
use crate::application::dto::DatasetSource;
use crate::ports::outbound::DatasetRepository;
use crate::shared::Result;

/// Factory for creating the dataset repository of a source
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn create(source: DatasetSource) -> Result<Box<dyn DatasetRepository>> {
        Ok(match source {
            DatasetSource::File(path) => Box::new(FileSystemDatasetReader::new(path)),
            DatasetSource::Http(url) => Box::new(HttpDatasetClient::new(url)?),
        })
    }
}
