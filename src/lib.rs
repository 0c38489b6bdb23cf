//! eol-report - package end-of-life and vulnerability report
//!
//! This library derives the views of an EOL dashboard (ecosystem overview,
//! package list with search and sort, package detail, support request form)
//! from a static JSON dataset, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`eol_analysis`): Dataset model and pure view derivations
//! - **Application Layer** (`application`): Page view models and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use eol_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! let repository = FileSystemDatasetReader::new(PathBuf::from("data.json"));
//! let mut use_case = BrowseReportUseCase::new(repository, StderrProgressReporter::new());
//! use_case.load().await?;
//!
//! let mut page = EcosystemPage::new("npm");
//! page.set_search("pad");
//! page.toggle_sort(SortField::Vulnerabilities);
//!
//! let output = MarkdownFormatter::new().format_ecosystem(&use_case.ecosystem_page(&page))?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod eol_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        StderrProgressReporter, StderrSupportRequestSink,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDatasetReader, FileSystemWriter, JsonLinesSupportRequestSink, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::HttpDatasetClient;
    pub use crate::application::dto::{DatasetSource, OutputFormat};
    pub use crate::application::use_cases::{BrowseReportUseCase, SubmitSupportRequestUseCase};
    pub use crate::application::view_models::{
        EcosystemPage, EcosystemPageView, EmptyListReason, HomePageView, PackagePage,
        PackagePageView,
    };
    pub use crate::eol_analysis::domain::{
        Dataset, Ecosystem, Package, Severity, SeverityBreakdown, SupportContext, SupportRequest,
        SupportRequestError, SupportRequestForm, Version, VersionStatus, Vulnerability,
    };
    pub use crate::eol_analysis::policies::SeverityRank;
    pub use crate::eol_analysis::services::{
        EcosystemAggregator, EcosystemSummary, PackageDetail, PackageDetailProjector,
        PackageListQuery, PackageProjector, PackageSummary, SortDirection, SortField, SortState,
    };
    pub use crate::ports::inbound::ReportQueryPort;
    pub use crate::ports::outbound::{
        DatasetRepository, OutputPresenter, ProgressReporter, ReportFormatter,
        SupportRequestSink,
    };
    pub use crate::shared::Result;
}
