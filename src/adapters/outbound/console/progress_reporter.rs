use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it doesn't interfere with the report on stdout.
/// Uses an indicatif spinner while waiting on a device.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn start_wait(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(previous) = spinner.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn finish_wait(&self) {
        self.clear_spinner();
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }
}

/// SilentProgressReporter adapter used with `--quiet`
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}

    fn start_wait(&self, _message: &str) {}

    fn finish_wait(&self) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.start_wait("Waiting");
        reporter.finish_wait();
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_finish_wait_without_start() {
        let reporter = StderrProgressReporter::default();
        reporter.finish_wait();
        reporter.report_completion("done");
    }

    #[test]
    fn test_start_wait_twice_replaces_spinner() {
        let reporter = StderrProgressReporter::new();
        reporter.start_wait("first");
        reporter.start_wait("second");
        reporter.finish_wait();
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_silent_reporter() {
        let reporter = SilentProgressReporter;
        reporter.report("ignored");
        reporter.start_wait("ignored");
        reporter.finish_wait();
    }
}
