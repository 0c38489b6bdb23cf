use async_trait::async_trait;
use eol_report::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock DatasetRepository for testing
///
/// Serves a fixed dataset (or a fixed failure) and counts loads.
#[derive(Clone)]
pub struct MockDatasetRepository {
    dataset: Option<Dataset>,
    load_count: Arc<AtomicUsize>,
}

impl MockDatasetRepository {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Some(dataset),
            load_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn from_json(content: &str) -> Self {
        Self::new(Dataset::from_json(content).unwrap())
    }

    /// Every load fails
    pub fn unavailable() -> Self {
        Self {
            dataset: None,
            load_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetRepository for MockDatasetRepository {
    async fn load_dataset(&self) -> Result<Dataset> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        match &self.dataset {
            Some(dataset) => Ok(dataset.clone()),
            None => anyhow::bail!("Mock dataset unavailable"),
        }
    }

    fn location(&self) -> String {
        "mock://dataset".to_string()
    }
}
