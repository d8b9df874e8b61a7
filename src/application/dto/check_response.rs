use crate::boot_check::domain::{DeviceProfile, DeviceSnapshot, ReportMetadata, Verdict};
use crate::shared::error::ExitCode;

/// CVE identifier of the custom boot mode vulnerability
pub const CVE_ID: &str = "CVE-2016-8467";

/// Write-up describing the vulnerability and the boot mode attack
pub const ADVISORY_URL: &str =
    "https://securityresear.ch/2017/01/05/attacking-android-custom-bootmodes/";

/// CheckResponse - response DTO from the device check use case
///
/// Carries the single verdict computed for this run; formatters render it
/// without re-evaluating.
#[derive(Debug, Clone)]
pub struct CheckResponse {
    /// Where the properties came from (e.g. "adb", "dump file props.txt")
    pub source: String,
    pub snapshot: DeviceSnapshot,
    /// Profile matched by device id, if any
    pub profile: Option<DeviceProfile>,
    pub verdict: Verdict,
    pub metadata: ReportMetadata,
}

impl CheckResponse {
    pub fn new(
        source: String,
        snapshot: DeviceSnapshot,
        profile: Option<DeviceProfile>,
        verdict: Verdict,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            source,
            snapshot,
            profile,
            verdict,
            metadata,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.verdict.requires_attention() {
            ExitCode::VulnerabilityDetected
        } else {
            ExitCode::Success
        }
    }
}
