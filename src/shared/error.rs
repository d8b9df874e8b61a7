use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish a device that
/// needs attention from a failure of the checker itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - device patched, not applicable, and boot mode not tampered
    Success = 0,
    /// Device is vulnerable or its boot mode was tampered with
    VulnerabilityDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (subprocess failure, file I/O error, bad config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VulnerabilityDetected => write!(f, "Vulnerability Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the boot mode checker.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Failed to read device properties via {source_name}\nDetails: {details}\n\n💡 Hint: {hint}")]
    PropertySourceFailed {
        source_name: String,
        details: String,
        hint: String,
    },

    #[error("Reading device properties via {source_name} timed out after {seconds}s\n\n💡 Hint: Check that the device is connected and authorized, or raise --timeout")]
    PropertySourceTimeout { source_name: String, seconds: u64 },

    #[error("getprop dump file not found: {path}\n\n💡 Hint: Capture one with `adb shell getprop > props.txt`")]
    DumpFileNotFound { path: PathBuf },

    #[error("Failed to read getprop dump file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DumpFileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
