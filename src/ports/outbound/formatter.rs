use crate::application::view_models::{EcosystemPageView, HomePageView, PackagePageView};
use crate::shared::Result;

/// ReportFormatter port for rendering page views
///
/// One method per page: ecosystem overview, package list of one ecosystem,
/// and package detail.
pub trait ReportFormatter {
    fn format_home(&self, view: &HomePageView) -> Result<String>;

    fn format_ecosystem(&self, view: &EcosystemPageView<'_>) -> Result<String>;

    fn format_package(&self, view: &PackagePageView<'_>) -> Result<String>;
}
