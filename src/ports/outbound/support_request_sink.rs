use crate::eol_analysis::domain::SupportRequest;
use crate::shared::Result;

/// SupportRequestSink port for handing off submitted support requests
///
/// The transport behind it (ticketing system, mail, log file) is not the
/// core's concern. It is called exactly once per successful submission.
pub trait SupportRequestSink {
    /// Delivers a submitted request
    ///
    /// # Errors
    /// Returns an error if the request could not be handed off
    fn submit(&self, request: &SupportRequest) -> Result<()>;
}

impl<T: SupportRequestSink + ?Sized> SupportRequestSink for Box<T> {
    fn submit(&self, request: &SupportRequest) -> Result<()> {
        (**self).submit(request)
    }
}
