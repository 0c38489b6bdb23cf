use crate::application::view_models::{
    EcosystemPage, EcosystemPageView, HomePageView, PackagePage, PackagePageView,
};

/// ReportQueryPort - Inbound port for reading report pages
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to obtain page views. Every call recomputes its view from the loaded
/// dataset and the page state passed in; nothing is cached between calls.
pub trait ReportQueryPort {
    /// Ecosystem overview: one summary per ecosystem
    fn home_page(&self) -> HomePageView;

    /// Filtered and sorted package list of the page's ecosystem
    ///
    /// An unknown ecosystem yields an empty list, never an error.
    fn ecosystem_page(&self, page: &EcosystemPage) -> EcosystemPageView<'_>;

    /// Detail of the page's package, absent when it does not resolve
    fn package_page(&self, page: &PackagePage) -> PackagePageView<'_>;
}
