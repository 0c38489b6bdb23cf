/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to a side channel (e.g. stderr) so the rendered report
/// on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts a long-running step such as loading the dataset
    ///
    /// The step ends with the next `report_completion` or `report_error`.
    fn begin(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
