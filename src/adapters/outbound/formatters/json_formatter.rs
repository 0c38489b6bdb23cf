use crate::application::view_models::{EcosystemPageView, HomePageView, PackagePageView};
use crate::eol_analysis::domain::{SeverityBreakdown, Version};
use crate::eol_analysis::services::{FlattenedVulnerability, PackageDetail};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Serializable snapshot of a package page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageDocument<'a> {
    ecosystem: &'a str,
    package: &'a str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<PackageDetailDocument<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageDetailDocument<'a> {
    name: &'a str,
    latest_version: Option<&'a Version>,
    total_vulnerabilities: usize,
    eol_version_count: usize,
    has_hero_devs_support: bool,
    vulnerabilities_by_severity: SeverityBreakdown,
    versions: &'a [Version],
    vulnerabilities: Vec<FlattenedVulnerability<'a>>,
}

impl<'a> From<PackageDetail<'a>> for PackageDetailDocument<'a> {
    fn from(detail: PackageDetail<'a>) -> Self {
        Self {
            name: detail.name(),
            latest_version: detail.latest_version(),
            total_vulnerabilities: detail.total_vulnerabilities(),
            eol_version_count: detail.eol_version_count(),
            has_hero_devs_support: detail.has_hero_devs_support(),
            vulnerabilities_by_severity: detail.vulnerabilities_by_severity(),
            versions: detail.versions(),
            vulnerabilities: detail.all_vulnerabilities(),
        }
    }
}

/// JsonFormatter adapter rendering page views as pretty-printed JSON
///
/// Keys are camelCase, matching the dataset document.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_home(&self, view: &HomePageView) -> Result<String> {
        Ok(serde_json::to_string_pretty(view)?)
    }

    fn format_ecosystem(&self, view: &EcosystemPageView<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(view)?)
    }

    fn format_package(&self, view: &PackagePageView<'_>) -> Result<String> {
        let document = PackageDocument {
            ecosystem: &view.ecosystem,
            package: &view.package,
            found: view.is_found(),
            detail: view.detail.map(PackageDetailDocument::from),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
