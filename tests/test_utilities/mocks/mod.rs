/// Mock implementations for testing
mod mock_dataset_repository;
mod mock_progress_reporter;
mod mock_support_request_sink;

pub use mock_dataset_repository::MockDatasetRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_support_request_sink::MockSupportRequestSink;
