use crate::eol_analysis::domain::{Dataset, Package, Severity, SeverityBreakdown, Version};
use crate::eol_analysis::policies::SeverityRank;
use serde::Serialize;

/// A vulnerability annotated with the version it was reported against
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlattenedVulnerability<'a> {
    pub cve: &'a str,
    pub severity: &'a Severity,
    pub score: f64,
    pub version: &'a str,
}

/// Detail view of one package
///
/// Every accessor derives its value from the package on each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageDetail<'a> {
    package: &'a Package,
}

impl<'a> PackageDetail<'a> {
    pub fn new(package: &'a Package) -> Self {
        Self { package }
    }

    pub fn name(&self) -> &'a str {
        &self.package.name
    }

    pub fn versions(&self) -> &'a [Version] {
        &self.package.versions
    }

    /// `versions[0]`, absent for a package without versions
    pub fn latest_version(&self) -> Option<&'a Version> {
        self.package.latest_version()
    }

    pub fn total_vulnerabilities(&self) -> usize {
        self.package.total_vulnerabilities()
    }

    pub fn eol_version_count(&self) -> usize {
        self.package.eol_version_count()
    }

    pub fn has_hero_devs_support(&self) -> bool {
        self.package.has_hero_devs_support()
    }

    pub fn vulnerabilities_by_severity(&self) -> SeverityBreakdown {
        self.package.severity_breakdown()
    }

    /// Every vulnerability of every version, most urgent first
    ///
    /// Sorted by severity rank then score, both descending. The sort is
    /// stable, so exact ties keep version order then in-version order.
    pub fn all_vulnerabilities(&self) -> Vec<FlattenedVulnerability<'a>> {
        let mut flattened: Vec<_> = self.package.vulnerabilities().collect();
        flattened.sort_by(|(_, a), (_, b)| SeverityRank::most_urgent_first(a, b));

        flattened
            .into_iter()
            .map(|(version, vuln)| FlattenedVulnerability {
                cve: &vuln.cve,
                severity: &vuln.severity,
                score: vuln.score,
                version: &version.version,
            })
            .collect()
    }
}

/// PackageDetailProjector - Resolves navigation parameters to a package detail
pub struct PackageDetailProjector;

impl PackageDetailProjector {
    /// Detail for `package` within `ecosystem`; `None` when either key is unmatched
    pub fn resolve<'a>(
        dataset: &'a Dataset,
        ecosystem: &str,
        package: &str,
    ) -> Option<PackageDetail<'a>> {
        if ecosystem.is_empty() || package.is_empty() {
            return None;
        }
        dataset
            .find_package(ecosystem, package)
            .map(PackageDetail::new)
    }
}
