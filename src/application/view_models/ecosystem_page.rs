use crate::eol_analysis::domain::Dataset;
use crate::eol_analysis::services::{
    PackageListQuery, PackageProjector, PackageSummary, SortField, SortState,
};
use serde::Serialize;

/// Why a package list came out empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyListReason {
    /// A search term is active and nothing matched it
    NoMatches,
    /// No search term, and the ecosystem has no packages (or is unknown)
    EmptyEcosystem,
}

/// Package list page of one ecosystem, with its search and sort state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcosystemPage {
    ecosystem: String,
    query: PackageListQuery,
}

impl EcosystemPage {
    pub fn new(ecosystem: impl Into<String>) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            query: PackageListQuery::default(),
        }
    }

    /// Starts from a different sort state than name/ascending
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.query.sort = sort;
        self
    }

    pub fn ecosystem(&self) -> &str {
        &self.ecosystem
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn sort(&self) -> SortState {
        self.query.sort
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Same contract as a click on a column's sort button
    pub fn toggle_sort(&mut self, field: SortField) {
        self.query.sort.toggle(field);
    }

    /// Recomputes the page from the dataset and the current state
    pub fn view<'a>(&self, dataset: &'a Dataset) -> EcosystemPageView<'a> {
        let all_packages = PackageProjector::project_by_key(dataset, &self.ecosystem);
        let packages = self.query.apply(&all_packages);

        let empty_reason = if !packages.is_empty() {
            None
        } else if self.query.has_search() {
            Some(EmptyListReason::NoMatches)
        } else {
            Some(EmptyListReason::EmptyEcosystem)
        };

        EcosystemPageView {
            ecosystem: self.ecosystem.clone(),
            total_packages: all_packages.len(),
            search: self.query.search.clone(),
            sort: self.query.sort,
            packages,
            empty_reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemPageView<'a> {
    pub ecosystem: String,
    /// Packages in the ecosystem before filtering
    pub total_packages: usize,
    pub search: String,
    pub sort: SortState,
    pub packages: Vec<PackageSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<EmptyListReason>,
}

impl EcosystemPageView<'_> {
    pub fn shown_count(&self) -> usize {
        self.packages.len()
    }

    /// True when the search hides some of the ecosystem's packages
    pub fn is_filtered(&self) -> bool {
        self.shown_count() != self.total_packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eol_analysis::domain::{
        Ecosystem, Package, Severity, Version, VersionStatus, Vulnerability,
    };
    use crate::eol_analysis::services::SortDirection;

    fn package_with_vulns(name: &str, count: usize) -> Package {
        let mut version = Version::new("1.0.0", VersionStatus::Current);
        for i in 0..count {
            version = version.with_vulnerability(Vulnerability::new(
                format!("CVE-{}", i),
                Severity::Medium,
                5.0,
            ));
        }
        Package::new(name, vec![version])
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Ecosystem::new(
                "npm",
                vec![
                    package_with_vulns("A", 0),
                    package_with_vulns("B", 5),
                    package_with_vulns("C", 2),
                ],
            ),
            Ecosystem::new("apt", vec![]),
        ])
    }

    fn names<'a>(view: &EcosystemPageView<'a>) -> Vec<&'a str> {
        view.packages.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_default_view_sorted_by_name() {
        let dataset = dataset();
        let view = EcosystemPage::new("npm").view(&dataset);
        assert_eq!(names(&view), vec!["A", "B", "C"]);
        assert_eq!(view.total_packages, 3);
        assert!(!view.is_filtered());
        assert!(view.empty_reason.is_none());
    }

    #[test]
    fn test_sort_clicks_follow_toggle_contract() {
        let dataset = dataset();
        let mut page = EcosystemPage::new("npm");

        page.toggle_sort(SortField::Vulnerabilities);
        assert_eq!(names(&page.view(&dataset)), vec!["A", "C", "B"]);

        page.toggle_sort(SortField::Vulnerabilities);
        assert_eq!(
            page.sort(),
            SortState::new(SortField::Vulnerabilities, SortDirection::Desc)
        );
        assert_eq!(names(&page.view(&dataset)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_search_reports_shown_count() {
        let dataset = dataset();
        let mut page = EcosystemPage::new("npm");
        page.set_search("b");

        let view = page.view(&dataset);
        assert_eq!(names(&view), vec!["B"]);
        assert_eq!(view.shown_count(), 1);
        assert!(view.is_filtered());
    }

    #[test]
    fn test_no_matches_reason_when_searching() {
        let dataset = dataset();
        let mut page = EcosystemPage::new("npm");
        page.set_search("zzz");

        let view = page.view(&dataset);
        assert_eq!(view.empty_reason, Some(EmptyListReason::NoMatches));
    }

    #[test]
    fn test_empty_ecosystem_reason_without_search() {
        let dataset = dataset();
        let view = EcosystemPage::new("apt").view(&dataset);
        assert_eq!(view.empty_reason, Some(EmptyListReason::EmptyEcosystem));
    }

    #[test]
    fn test_unknown_ecosystem_is_empty_not_error() {
        let dataset = dataset();
        let view = EcosystemPage::new("cargo").view(&dataset);
        assert!(view.packages.is_empty());
        assert_eq!(view.total_packages, 0);
        assert_eq!(view.empty_reason, Some(EmptyListReason::EmptyEcosystem));
    }

    #[test]
    fn test_view_before_load_is_empty() {
        let dataset = Dataset::default();
        let view = EcosystemPage::new("npm").view(&dataset);
        assert!(view.packages.is_empty());
    }

    #[test]
    fn test_with_sort_sets_initial_state() {
        let page = EcosystemPage::new("npm")
            .with_sort(SortState::new(SortField::Status, SortDirection::Asc));
        assert_eq!(page.sort().field, SortField::Status);
    }
}
