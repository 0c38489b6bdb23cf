use crate::application::view_models::{
    EcosystemPage, EcosystemPageView, HomePageView, PackagePage, PackagePageView,
};
use crate::eol_analysis::domain::Dataset;
use crate::ports::inbound::ReportQueryPort;
use crate::ports::outbound::{DatasetRepository, ProgressReporter};
use crate::shared::Result;
use std::sync::Arc;

/// BrowseReportUseCase - Loads the dataset once and serves page views over it
///
/// Until `load` succeeds every page is derived from the empty dataset.
///
/// # Type Parameters
/// * `R` - DatasetRepository implementation
/// * `P` - ProgressReporter implementation
pub struct BrowseReportUseCase<R, P> {
    dataset_repository: R,
    progress_reporter: P,
    dataset: Arc<Dataset>,
    loaded: bool,
}

impl<R, P> BrowseReportUseCase<R, P>
where
    R: DatasetRepository,
    P: ProgressReporter,
{
    pub fn new(dataset_repository: R, progress_reporter: P) -> Self {
        Self {
            dataset_repository,
            progress_reporter,
            dataset: Arc::new(Dataset::default()),
            loaded: false,
        }
    }

    /// Fetches the dataset from the repository
    ///
    /// Only the first successful call touches the repository; later calls
    /// are no-ops. A failed load leaves the empty dataset in place.
    pub async fn load(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }

        self.progress_reporter.begin(&format!(
            "📖 Loading dataset from: {}",
            self.dataset_repository.location()
        ));

        let dataset = match self.dataset_repository.load_dataset().await {
            Ok(dataset) => dataset,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Failed to load dataset");
                return Err(e);
            }
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} ecosystem(s) with {} package(s)",
            dataset.ecosystems().len(),
            dataset.package_count()
        ));

        self.dataset = Arc::new(dataset);
        self.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Shared read-only handle to the current dataset
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }
}

impl<R, P> ReportQueryPort for BrowseReportUseCase<R, P>
where
    R: DatasetRepository,
    P: ProgressReporter,
{
    fn home_page(&self) -> HomePageView {
        HomePageView::from_dataset(&self.dataset)
    }

    fn ecosystem_page(&self, page: &EcosystemPage) -> EcosystemPageView<'_> {
        page.view(&self.dataset)
    }

    fn package_page(&self, page: &PackagePage) -> PackagePageView<'_> {
        page.view(&self.dataset)
    }
}
