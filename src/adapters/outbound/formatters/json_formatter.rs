use crate::application::dto::{CheckResponse, ADVISORY_URL, CVE_ID};
use crate::boot_check::domain::{
    BootModeState, DeviceProfile, DeviceSnapshot, ReportMetadata, VulnerabilityStatus,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: &'a ReportMetadata,
    source: &'a str,
    device: &'a DeviceSnapshot,
    profile: Option<&'a DeviceProfile>,
    verdict: VerdictView,
    advisory: Advisory,
}

#[derive(Debug, Serialize)]
struct VerdictView {
    vulnerability: VulnerabilityStatus,
    boot_mode: BootModeState,
    tampered: bool,
}

#[derive(Debug, Serialize)]
struct Advisory {
    id: &'static str,
    url: &'static str,
}

/// JsonFormatter adapter for machine-readable reports
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &CheckResponse) -> Result<String> {
        let report = Report {
            metadata: &response.metadata,
            source: &response.source,
            device: &response.snapshot,
            profile: response.profile.as_ref(),
            verdict: VerdictView {
                vulnerability: response.verdict.vulnerability(),
                boot_mode: response.verdict.boot_mode(),
                tampered: response.verdict.is_tampered(),
            },
            advisory: Advisory {
                id: CVE_ID,
                url: ADVISORY_URL,
            },
        };

        let mut json = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
