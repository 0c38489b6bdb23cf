use crate::application::view_models::PackagePage;
use crate::eol_analysis::domain::SupportRequest;
use crate::ports::outbound::{ProgressReporter, SupportRequestSink};
use crate::shared::Result;

/// Shown once a request has been handed to the sink
pub const CONFIRMATION_MESSAGE: &str =
    "✅ Thank you! Your support request has been submitted. A HeroDevs representative will contact you shortly.";

/// SubmitSupportRequestUseCase - Submits the open support form of a package page
///
/// # Type Parameters
/// * `S` - SupportRequestSink implementation
/// * `P` - ProgressReporter implementation
pub struct SubmitSupportRequestUseCase<S, P> {
    sink: S,
    progress_reporter: P,
}

impl<S, P> SubmitSupportRequestUseCase<S, P>
where
    S: SupportRequestSink,
    P: ProgressReporter,
{
    pub fn new(sink: S, progress_reporter: P) -> Self {
        Self {
            sink,
            progress_reporter,
        }
    }

    /// Validates and closes the page's form, then hands the record to the sink
    ///
    /// # Errors
    /// Returns an error if the form is closed or incomplete (the form stays
    /// as it was), or if the sink rejects the record.
    pub fn execute(&self, page: &mut PackagePage) -> Result<SupportRequest> {
        let request = page.submit_support()?;

        self.sink.submit(&request)?;
        self.progress_reporter.report_completion(CONFIRMATION_MESSAGE);

        Ok(request)
    }
}
