use crate::eol_analysis::domain::Dataset;
use crate::eol_analysis::services::{EcosystemAggregator, EcosystemSummary};
use serde::Serialize;

/// Ecosystem overview page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePageView {
    pub ecosystems: Vec<EcosystemSummary>,
}

impl HomePageView {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            ecosystems: EcosystemAggregator::summarize_all(dataset),
        }
    }

    /// True before the dataset is loaded, or when it holds no ecosystems
    pub fn is_empty(&self) -> bool {
        self.ecosystems.is_empty()
    }
}
