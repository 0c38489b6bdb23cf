/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod support_request_log;

pub use file_reader::FileSystemDatasetReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use support_request_log::JsonLinesSupportRequestSink;
