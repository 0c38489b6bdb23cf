use super::package_projector::PackageSummary;
use serde::Serialize;
use std::cmp::Ordering;

/// Column the package list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Vulnerabilities,
    Status,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Vulnerabilities => "vulnerabilities",
            SortField::Status => "status",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "vulnerabilities" | "vulns" => Ok(SortField::Vulnerabilities),
            "status" => Ok(SortField::Status),
            _ => Err(format!(
                "Invalid sort field: {}. Please specify 'name', 'vulnerabilities' or 'status'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Selecting the active field flips direction; any other field becomes
    /// active in ascending order.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Arrow shown next to a column header, empty for inactive columns
    pub fn indicator(&self, field: SortField) -> &'static str {
        if self.field != field {
            return "";
        }
        match self.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }

    fn compare(&self, a: &PackageSummary<'_>, b: &PackageSummary<'_>) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Vulnerabilities => a.total_vulnerabilities.cmp(&b.total_vulnerabilities),
            SortField::Status => a.status.cmp(b.status),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Search text plus sort state applied to a projected package list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageListQuery {
    pub search: String,
    pub sort: SortState,
}

impl PackageListQuery {
    pub fn new(search: impl Into<String>, sort: SortState) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// Returns a filtered and sorted copy; the input is left untouched
    ///
    /// Filtering is a case-insensitive substring match on the package name.
    /// The sort is stable, so ties keep their filtered order.
    pub fn apply<'a>(&self, packages: &[PackageSummary<'a>]) -> Vec<PackageSummary<'a>> {
        let needle = self.search.to_lowercase();

        let mut filtered: Vec<PackageSummary<'a>> = packages
            .iter()
            .filter(|pkg| needle.is_empty() || pkg.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| self.sort.compare(a, b));
        filtered
    }
}
