use super::PatchDate;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Maximum length for device codenames (security limit)
const MAX_DEVICE_ID_LENGTH: usize = 64;

/// DeviceProfile value object: a device codename and the first patch level that fixes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceProfile {
    device_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    patched_on: PatchDate,
}

impl DeviceProfile {
    pub fn new(device_id: String, name: Option<String>, patched_on: PatchDate) -> Result<Self> {
        if device_id.trim().is_empty() {
            anyhow::bail!("Device id cannot be empty");
        }

        if device_id.len() > MAX_DEVICE_ID_LENGTH {
            anyhow::bail!(
                "Device id is too long ({} bytes). Maximum allowed: {} bytes",
                device_id.len(),
                MAX_DEVICE_ID_LENGTH
            );
        }

        Ok(Self {
            device_id,
            name,
            patched_on,
        })
    }

    fn builtin(device_id: &str, name: &str, patched_on: PatchDate) -> Self {
        Self {
            device_id: device_id.to_string(),
            name: Some(name.to_string()),
            patched_on,
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Threshold patch level: anything strictly earlier is vulnerable
    pub fn patched_on(&self) -> &PatchDate {
        &self.patched_on
    }
}

/// DeviceProfiles - the set of devices the checker can make a claim about
///
/// Keyed by exact (case-sensitive) device codename, as reported by
/// `ro.product.device`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceProfiles {
    profiles: BTreeMap<String, DeviceProfile>,
}

impl DeviceProfiles {
    /// An empty profile set: every device is not applicable
    pub fn empty() -> Self {
        Self::default()
    }

    /// Nexus 6 (`shamu`, November 2016 bulletin) and Nexus 6P (`angler`,
    /// January 2017 bulletin)
    pub fn builtin() -> Self {
        Self::empty()
            .with_profile(DeviceProfile::builtin(
                "shamu",
                "Nexus 6",
                PatchDate::new(2016, 11, 5),
            ))
            .with_profile(DeviceProfile::builtin(
                "angler",
                "Nexus 6P",
                PatchDate::new(2017, 1, 5),
            ))
    }

    /// Adds a profile, replacing any existing profile with the same device id
    pub fn with_profile(mut self, profile: DeviceProfile) -> Self {
        self.insert(profile);
        self
    }

    pub fn insert(&mut self, profile: DeviceProfile) -> Option<DeviceProfile> {
        self.profiles.insert(profile.device_id.clone(), profile)
    }

    pub fn get(&self, device_id: &str) -> Option<&DeviceProfile> {
        self.profiles.get(device_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles() {
        let profiles = DeviceProfiles::builtin();
        assert_eq!(profiles.len(), 2);

        let shamu = profiles.get("shamu").unwrap();
        assert_eq!(shamu.patched_on(), &PatchDate::new(2016, 11, 5));
        assert_eq!(shamu.name(), Some("Nexus 6"));

        let angler = profiles.get("angler").unwrap();
        assert_eq!(angler.patched_on(), &PatchDate::new(2017, 1, 5));
        assert_eq!(angler.name(), Some("Nexus 6P"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let profiles = DeviceProfiles::builtin();
        assert!(profiles.get("Shamu").is_none());
        assert!(profiles.get("shamu ").is_none());
    }

    #[test]
    fn test_empty_profiles() {
        let profiles = DeviceProfiles::empty();
        assert!(profiles.is_empty());
        assert!(profiles.get("shamu").is_none());
    }

    #[test]
    fn test_with_profile_overrides_existing() {
        let profile =
            DeviceProfile::new("shamu".to_string(), None, PatchDate::new(2016, 12, 5)).unwrap();
        let profiles = DeviceProfiles::builtin().with_profile(profile);

        assert_eq!(profiles.len(), 2);
        let shamu = profiles.get("shamu").unwrap();
        assert_eq!(shamu.patched_on(), &PatchDate::new(2016, 12, 5));
        assert!(shamu.name().is_none());
    }

    #[test]
    fn test_iter_is_sorted_by_device_id() {
        let profiles = DeviceProfiles::builtin();
        let ids: Vec<&str> = profiles.iter().map(|p| p.device_id()).collect();
        assert_eq!(ids, vec!["angler", "shamu"]);
    }

    #[test]
    fn test_device_profile_new_empty_id() {
        let result = DeviceProfile::new("  ".to_string(), None, PatchDate::new(2016, 11, 5));
        assert!(result.is_err());
    }

    #[test]
    fn test_device_profile_new_too_long_id() {
        let result = DeviceProfile::new("x".repeat(65), None, PatchDate::new(2016, 11, 5));
        assert!(result.unwrap_err().to_string().contains("too long"));
    }
}
