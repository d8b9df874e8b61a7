use crate::application::dto::{CheckResponse, ADVISORY_URL, CVE_ID};
use crate::boot_check::domain::{BootModeState, VulnerabilityStatus};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Alarm color (#cc0000)
const RED: (u8, u8, u8) = (0xcc, 0x00, 0x00);
/// All-clear color (#669900)
const GREEN: (u8, u8, u8) = (0x66, 0x99, 0x00);

/// Placeholder for values that could not be read
const UNAVAILABLE: &str = "(unavailable)";

/// TextFormatter adapter for terminal output
///
/// Red marks a vulnerable device or tampered boot mode, green marks a
/// patched device or normal boot mode. Not-applicable and unavailable states
/// are left uncolored.
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: Option<(u8, u8, u8)>) -> String {
        match color {
            Some((r, g, b)) if self.use_color => text.truecolor(r, g, b).bold().to_string(),
            _ => text.to_string(),
        }
    }

    fn vulnerability_color(status: VulnerabilityStatus) -> Option<(u8, u8, u8)> {
        match status {
            VulnerabilityStatus::Vulnerable => Some(RED),
            VulnerabilityStatus::Patched => Some(GREEN),
            VulnerabilityStatus::NotApplicable => None,
        }
    }

    fn boot_mode_color(state: BootModeState) -> Option<(u8, u8, u8)> {
        match state {
            BootModeState::Tampered => Some(RED),
            BootModeState::Normal => Some(GREEN),
            BootModeState::Unavailable => None,
        }
    }

    fn or_unavailable(value: &str) -> &str {
        if value.is_empty() {
            UNAVAILABLE
        } else {
            value
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &CheckResponse) -> Result<String> {
        let snapshot = &response.snapshot;
        let verdict = &response.verdict;
        let mut output = String::new();

        output.push_str(&format!("{} boot mode check\n\n", CVE_ID));

        let codename = match response.profile.as_ref().and_then(|p| p.name()) {
            Some(name) => format!("{} ({})", Self::or_unavailable(snapshot.device_id()), name),
            None => Self::or_unavailable(snapshot.device_id()).to_string(),
        };
        let threshold = response
            .profile
            .as_ref()
            .map(|p| p.patched_on().to_string())
            .unwrap_or_else(|| "n/a".to_string());

        let rows = [
            ("Codename", codename),
            ("Bootloader", snapshot.bootloader().unwrap_or(UNAVAILABLE).to_string()),
            ("Boot mode", Self::or_unavailable(snapshot.boot_mode()).to_string()),
            ("Patch level", snapshot.patch_level().unwrap_or("unknown").to_string()),
            ("Patched on", threshold),
            ("Source", response.source.clone()),
        ];
        for (label, value) in rows {
            output.push_str(&format!("  {:<14} {}\n", format!("{}:", label), value));
        }
        output.push('\n');

        let vulnerability = verdict.vulnerability();
        output.push_str(&format!(
            "  {:<14} {}\n",
            "Vulnerability:",
            self.paint(vulnerability.label(), Self::vulnerability_color(vulnerability))
        ));

        let boot_mode = verdict.boot_mode();
        output.push_str(&format!(
            "  {:<14} {}\n",
            "Boot mode:",
            self.paint(boot_mode.label(), Self::boot_mode_color(boot_mode))
        ));

        if verdict.is_tampered() {
            output.push_str(
                "\n  ⚠️  The boot mode property is not 'normal'. The device may be under attack.\n",
            );
        }

        output.push_str(&format!("\nMore info: {}\n", ADVISORY_URL));
        Ok(output)
    }
}
