/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr) so that
/// stdout carries only the report itself.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate wait (e.g., while a subprocess runs)
    fn start_wait(&self, message: &str);

    /// Ends a wait started with `start_wait`
    fn finish_wait(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl ProgressReporter for Box<dyn ProgressReporter> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn start_wait(&self, message: &str) {
        (**self).start_wait(message)
    }

    fn finish_wait(&self) {
        (**self).finish_wait()
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
