pub mod ecosystem;
pub mod package;
pub mod severity_breakdown;
pub mod support_request;
pub mod version;
pub mod vulnerability;

pub use ecosystem::{Dataset, Ecosystem};
pub use package::Package;
pub use severity_breakdown::SeverityBreakdown;
pub use support_request::{
    SupportContext, SupportRequest, SupportRequestError, SupportRequestFields, SupportRequestForm,
};
pub use version::{Version, VersionStatus};
pub use vulnerability::{Severity, Vulnerability};
