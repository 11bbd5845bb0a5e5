/// ProgressReporter port for user-facing diagnostics
///
/// All status output of mdbom goes through this port so that the rendered
/// document on stdout is never interleaved with messages.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through a sequence of items (e.g. BOM files)
    ///
    /// # Arguments
    /// * `current` - Number of items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional label for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
