use serde::Serialize;
use std::collections::HashMap;

/// Device codename (`Build.DEVICE`)
pub const PROP_DEVICE: &str = "ro.product.device";
/// Mode the bootloader was asked to enter
pub const PROP_BOOT_MODE: &str = "ro.boot.mode";
/// Security patch level (`Build.VERSION.SECURITY_PATCH`)
pub const PROP_SECURITY_PATCH: &str = "ro.build.version.security_patch";
/// Bootloader version (`Build.BOOTLOADER`)
pub const PROP_BOOTLOADER: &str = "ro.bootloader";

/// Raw system properties as read from a device
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceProperties {
    values: HashMap<String, String>,
}

impl DeviceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key.to_string(), value.to_string());
        self
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value only when the property exists and is not blank
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for DeviceProperties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Values supplied explicitly by the caller, taking precedence over properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotOverrides {
    pub device_id: Option<String>,
    pub boot_mode: Option<String>,
    pub patch_level: Option<String>,
}

/// DeviceSnapshot - the raw strings the evaluator classifies
///
/// Absence decisions happen here: a missing boot mode becomes the empty
/// string (unavailable) and a missing or blank patch level becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSnapshot {
    device_id: String,
    boot_mode: String,
    patch_level: Option<String>,
    bootloader: Option<String>,
}

impl DeviceSnapshot {
    pub fn new(
        device_id: String,
        boot_mode: String,
        patch_level: Option<String>,
        bootloader: Option<String>,
    ) -> Self {
        Self {
            device_id,
            boot_mode,
            patch_level,
            bootloader,
        }
    }

    pub fn from_properties(properties: &DeviceProperties, overrides: &SnapshotOverrides) -> Self {
        let device_id = overrides
            .device_id
            .clone()
            .or_else(|| properties.get(PROP_DEVICE).map(str::to_string))
            .unwrap_or_default();

        let boot_mode = overrides
            .boot_mode
            .clone()
            .or_else(|| properties.get(PROP_BOOT_MODE).map(str::to_string))
            .unwrap_or_default();

        let patch_level = overrides
            .patch_level
            .clone()
            .or_else(|| properties.get_non_empty(PROP_SECURITY_PATCH).map(str::to_string));

        let bootloader = properties.get_non_empty(PROP_BOOTLOADER).map(str::to_string);

        Self::new(device_id, boot_mode, patch_level, bootloader)
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn boot_mode(&self) -> &str {
        &self.boot_mode
    }

    pub fn patch_level(&self) -> Option<&str> {
        self.patch_level.as_deref()
    }

    pub fn bootloader(&self) -> Option<&str> {
        self.bootloader.as_deref()
    }
}
