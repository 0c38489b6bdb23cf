use crate::eol_analysis::domain::{Dataset, Ecosystem, Package, SeverityBreakdown, Version};
use serde::Serialize;

/// Shown as the latest version of a package without versions
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Shown as the status of a package without versions
pub const UNKNOWN_STATUS: &str = "unknown";

/// Per-package row of the package list
///
/// Borrows from the dataset; `versions` is passed through unchanged for
/// detail rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary<'a> {
    pub name: &'a str,
    pub latest_version: &'a str,
    pub status: &'a str,
    pub eol_version_count: usize,
    pub has_hero_devs_support: bool,
    pub total_vulnerabilities: usize,
    pub max_severity_score: f64,
    pub vulnerabilities_by_severity: SeverityBreakdown,
    #[serde(skip)]
    pub versions: &'a [Version],
}

/// PackageProjector - Projects an ecosystem's packages into list rows
pub struct PackageProjector;

impl PackageProjector {
    /// One summary per package, in the ecosystem's package order
    pub fn project(ecosystem: &Ecosystem) -> Vec<PackageSummary<'_>> {
        ecosystem.packages.iter().map(Self::summarize).collect()
    }

    /// Projects the ecosystem with the given key; unknown keys yield an empty list
    pub fn project_by_key<'a>(dataset: &'a Dataset, ecosystem: &str) -> Vec<PackageSummary<'a>> {
        dataset
            .find_ecosystem(ecosystem)
            .map(Self::project)
            .unwrap_or_default()
    }

    pub fn summarize(package: &Package) -> PackageSummary<'_> {
        let latest = package.latest_version();

        PackageSummary {
            name: &package.name,
            latest_version: latest.map_or(UNKNOWN_VERSION, |v| v.version.as_str()),
            status: latest.map_or(UNKNOWN_STATUS, |v| v.status.as_str()),
            eol_version_count: package.eol_version_count(),
            has_hero_devs_support: package.has_hero_devs_support(),
            total_vulnerabilities: package.total_vulnerabilities(),
            max_severity_score: package.max_severity_score(),
            vulnerabilities_by_severity: package.severity_breakdown(),
            versions: &package.versions,
        }
    }
}
