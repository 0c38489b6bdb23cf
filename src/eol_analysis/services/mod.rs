mod ecosystem_aggregator;
mod package_detail_projector;
mod package_list_filter;
mod package_projector;

pub use ecosystem_aggregator::{EcosystemAggregator, EcosystemSummary};
pub use package_detail_projector::{FlattenedVulnerability, PackageDetail, PackageDetailProjector};
pub use package_list_filter::{PackageListQuery, SortDirection, SortField, SortState};
pub use package_projector::{PackageProjector, PackageSummary, UNKNOWN_STATUS, UNKNOWN_VERSION};
