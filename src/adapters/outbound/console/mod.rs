/// Console adapters writing to stderr
mod progress_reporter;
mod support_request_printer;

pub use progress_reporter::StderrProgressReporter;
pub use support_request_printer::StderrSupportRequestSink;
