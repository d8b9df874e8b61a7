/// Console adapters for stderr progress output
mod progress_reporter;

pub use progress_reporter::{SilentProgressReporter, StderrProgressReporter};
