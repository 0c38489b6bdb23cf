/// Use cases module containing application business logic orchestration
mod browse_report;
mod submit_support_request;

pub use browse_report::BrowseReportUseCase;
pub use submit_support_request::{SubmitSupportRequestUseCase, CONFIRMATION_MESSAGE};
