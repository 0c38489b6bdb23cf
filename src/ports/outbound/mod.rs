/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod dataset_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod support_request_sink;

pub use dataset_repository::DatasetRepository;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use support_request_sink::SupportRequestSink;
