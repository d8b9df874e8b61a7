use crate::boot_check::domain::{
    BootModeState, DateOrdering, DeviceProfile, DeviceProfiles, DeviceSnapshot, PatchDate,
    Verdict, VulnerabilityStatus, NORMAL_BOOT_MODE,
};

/// PatchLevelEvaluator - pure classification of patch levels and boot modes
///
/// Holds only the immutable device profile table, so it can be shared across
/// threads and called repeatedly with the same result.
#[derive(Debug, Clone)]
pub struct PatchLevelEvaluator {
    profiles: DeviceProfiles,
}

impl PatchLevelEvaluator {
    pub fn new(profiles: DeviceProfiles) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &DeviceProfiles {
        &self.profiles
    }

    pub fn profile_for(&self, device_id: &str) -> Option<&DeviceProfile> {
        self.profiles.get(device_id)
    }

    /// Compares two `YYYY-MM-DD` strings component-wise (year, month, day)
    ///
    /// The threshold is expected to be well-formed; if either side fails to
    /// parse the result is `Unparseable`.
    pub fn compare_dates(candidate: &str, threshold: &str) -> DateOrdering {
        match PatchDate::parse(threshold) {
            Some(threshold) => Self::compare_to_threshold(candidate, &threshold),
            None => DateOrdering::Unparseable,
        }
    }

    pub fn compare_to_threshold(candidate: &str, threshold: &PatchDate) -> DateOrdering {
        match PatchDate::parse(candidate) {
            Some(candidate) => DateOrdering::between(&candidate, threshold),
            None => DateOrdering::Unparseable,
        }
    }

    /// Classifies a device/patch level pair
    ///
    /// A missing or malformed patch level on a known device is `Vulnerable`.
    pub fn classify_vulnerability(
        &self,
        device_id: &str,
        patch_level: Option<&str>,
    ) -> VulnerabilityStatus {
        let Some(profile) = self.profiles.get(device_id) else {
            return VulnerabilityStatus::NotApplicable;
        };

        let ordering = match patch_level {
            Some(level) => Self::compare_to_threshold(level, profile.patched_on()),
            None => DateOrdering::Unparseable,
        };

        if ordering.is_before() {
            VulnerabilityStatus::Vulnerable
        } else {
            VulnerabilityStatus::Patched
        }
    }

    /// True iff the boot mode is present and not `normal`
    pub fn classify_tamper(boot_mode: &str) -> bool {
        !boot_mode.is_empty() && boot_mode != NORMAL_BOOT_MODE
    }

    pub fn evaluate(&self, snapshot: &DeviceSnapshot) -> Verdict {
        let vulnerability =
            self.classify_vulnerability(snapshot.device_id(), snapshot.patch_level());
        Verdict::new(
            vulnerability,
            BootModeState::from_boot_mode(snapshot.boot_mode()),
        )
    }
}

impl Default for PatchLevelEvaluator {
    fn default() -> Self {
        Self::new(DeviceProfiles::builtin())
    }
}
