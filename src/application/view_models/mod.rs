//! Page view models
//!
//! Each page owns its UI state and exposes transition functions. Views are
//! recomputed from the dataset on every call.

pub mod ecosystem_page;
pub mod home_page;
pub mod package_page;

pub use ecosystem_page::{EcosystemPage, EcosystemPageView, EmptyListReason};
pub use home_page::HomePageView;
pub use package_page::{PackagePage, PackagePageView};
