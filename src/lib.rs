//! bootmode-checker - CVE-2016-8467 checker for Nexus 6/6P devices
//!
//! Detects whether a device's security patch level predates the fix for the
//! custom boot mode vulnerability, and whether the `ro.boot.mode` property has
//! been tampered with (which may indicate the device is under attack).
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`boot_check`): Pure classification logic and value objects
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use bootmode_checker::prelude::*;
//!
//! let evaluator = PatchLevelEvaluator::new(DeviceProfiles::builtin());
//!
//! assert_eq!(
//!     evaluator.classify_vulnerability("shamu", Some("2016-11-04")),
//!     VulnerabilityStatus::Vulnerable
//! );
//! assert_eq!(
//!     evaluator.classify_vulnerability("shamu", Some("2016-11-05")),
//!     VulnerabilityStatus::Patched
//! );
//! assert!(PatchLevelEvaluator::classify_tamper("recovery"));
//! assert!(!PatchLevelEvaluator::classify_tamper(""));
//! ```

pub mod adapters;
pub mod application;
pub mod boot_check;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::properties::{
        AdbPropertySource, GetpropDumpReader, LocalGetpropSource, StaticPropertySource,
    };
    pub use crate::application::dto::{CheckRequest, CheckResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::CheckDeviceUseCase;
    pub use crate::boot_check::domain::{
        BootModeState, DateOrdering, DeviceProfile, DeviceProfiles, DeviceProperties,
        DeviceSnapshot, PatchDate, SnapshotOverrides, Verdict, VulnerabilityStatus,
    };
    pub use crate::boot_check::services::PatchLevelEvaluator;
    pub use crate::ports::outbound::{
        DevicePropertySource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::ExitCode;
    pub use crate::shared::Result;
}
