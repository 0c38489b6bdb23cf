/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod dataset_source;
mod output_format;

pub use dataset_source::DatasetSource;
pub use output_format::OutputFormat;
