use serde::Serialize;
use std::fmt;

/// Literal value of `ro.boot.mode` on an untampered device
pub const NORMAL_BOOT_MODE: &str = "normal";

/// Vulnerability classification for a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VulnerabilityStatus {
    /// Device is not in the known profile set; no claim is made
    NotApplicable,
    /// Patch level is before the device threshold, or could not be read
    Vulnerable,
    /// Patch level is at or after the device threshold
    Patched,
}

impl VulnerabilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VulnerabilityStatus::NotApplicable => "NOT APPLICABLE",
            VulnerabilityStatus::Vulnerable => "VULNERABLE",
            VulnerabilityStatus::Patched => "PATCHED",
        }
    }
}

impl fmt::Display for VulnerabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of the `ro.boot.mode` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootModeState {
    Normal,
    Tampered,
    /// Property could not be read (empty value)
    Unavailable,
}

impl BootModeState {
    pub fn from_boot_mode(boot_mode: &str) -> Self {
        if boot_mode.is_empty() {
            BootModeState::Unavailable
        } else if boot_mode == NORMAL_BOOT_MODE {
            BootModeState::Normal
        } else {
            BootModeState::Tampered
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BootModeState::Normal => "NORMAL",
            BootModeState::Tampered => "BOOTMODE TAMPERED",
            BootModeState::Unavailable => "UNAVAILABLE",
        }
    }
}

impl fmt::Display for BootModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict value object: vulnerability classification plus boot mode state
///
/// The two parts are independent: a patched device can still report a
/// tampered boot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    vulnerability: VulnerabilityStatus,
    boot_mode: BootModeState,
}

impl Verdict {
    pub fn new(vulnerability: VulnerabilityStatus, boot_mode: BootModeState) -> Self {
        Self {
            vulnerability,
            boot_mode,
        }
    }

    pub fn vulnerability(&self) -> VulnerabilityStatus {
        self.vulnerability
    }

    pub fn boot_mode(&self) -> BootModeState {
        self.boot_mode
    }

    pub fn is_vulnerable(&self) -> bool {
        self.vulnerability == VulnerabilityStatus::Vulnerable
    }

    pub fn is_tampered(&self) -> bool {
        self.boot_mode == BootModeState::Tampered
    }

    /// True when the device is vulnerable or its boot mode was tampered with
    pub fn requires_attention(&self) -> bool {
        self.is_vulnerable() || self.is_tampered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_mode_state_from_boot_mode() {
        assert_eq!(BootModeState::from_boot_mode(""), BootModeState::Unavailable);
        assert_eq!(BootModeState::from_boot_mode("normal"), BootModeState::Normal);
        assert_eq!(BootModeState::from_boot_mode("recovery"), BootModeState::Tampered);
        assert_eq!(BootModeState::from_boot_mode("ffbm-00"), BootModeState::Tampered);
        assert_eq!(BootModeState::from_boot_mode("NORMAL"), BootModeState::Tampered);
    }

    #[test]
    fn test_labels() {
        assert_eq!(VulnerabilityStatus::Vulnerable.to_string(), "VULNERABLE");
        assert_eq!(VulnerabilityStatus::Patched.to_string(), "PATCHED");
        assert_eq!(VulnerabilityStatus::NotApplicable.to_string(), "NOT APPLICABLE");
        assert_eq!(BootModeState::Tampered.to_string(), "BOOTMODE TAMPERED");
    }

    #[test]
    fn test_verdict_flags_are_independent() {
        let verdict = Verdict::new(VulnerabilityStatus::Patched, BootModeState::Tampered);
        assert!(!verdict.is_vulnerable());
        assert!(verdict.is_tampered());
        assert!(verdict.requires_attention());

        let verdict = Verdict::new(VulnerabilityStatus::NotApplicable, BootModeState::Unavailable);
        assert!(!verdict.requires_attention());
    }

    #[test]
    fn test_verdict_serialization() {
        let verdict = Verdict::new(VulnerabilityStatus::NotApplicable, BootModeState::Normal);
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, r#"{"vulnerability":"not_applicable","boot_mode":"normal"}"#);
    }
}
