use crate::eol_analysis::domain::{Dataset, Ecosystem, Package, SeverityBreakdown};
use serde::Serialize;

/// Aggregated counts over one ecosystem
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemSummary {
    pub ecosystem: String,
    pub package_count: usize,
    /// Packages with at least one end-of-life version
    pub eol_package_count: usize,
    /// Packages with at least one NES-supported version
    pub hero_devs_package_count: usize,
    pub total_vulnerabilities: usize,
    pub vulnerabilities_by_severity: SeverityBreakdown,
}

/// EcosystemAggregator - Derives per-ecosystem summary statistics
pub struct EcosystemAggregator;

impl EcosystemAggregator {
    /// Summarizes a single ecosystem
    ///
    /// Total over its input: an ecosystem without packages yields zero counts
    /// and an empty severity breakdown.
    pub fn summarize(ecosystem: &Ecosystem) -> EcosystemSummary {
        let packages = &ecosystem.packages;

        let mut vulnerabilities_by_severity = SeverityBreakdown::new();
        for package in packages {
            vulnerabilities_by_severity.merge(&package.severity_breakdown());
        }

        EcosystemSummary {
            ecosystem: ecosystem.ecosystem.clone(),
            package_count: packages.len(),
            eol_package_count: Self::count_where(packages, Package::has_end_of_life_version),
            hero_devs_package_count: Self::count_where(packages, Package::has_hero_devs_support),
            total_vulnerabilities: packages.iter().map(Package::total_vulnerabilities).sum(),
            vulnerabilities_by_severity,
        }
    }

    /// Summarizes every ecosystem, in dataset order
    pub fn summarize_all(dataset: &Dataset) -> Vec<EcosystemSummary> {
        dataset.ecosystems().iter().map(Self::summarize).collect()
    }

    fn count_where(packages: &[Package], predicate: impl Fn(&Package) -> bool) -> usize {
        packages.iter().filter(|&p| predicate(p)).count()
    }
}
