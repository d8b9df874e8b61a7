//! Configuration file support for bootmode-checker.
//!
//! Provides YAML-based configuration through `bootmode-checker.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::boot_check::domain::{DeviceProfile, DeviceProfiles, PatchDate};
use crate::shared::error::CheckerError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bootmode-checker.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Extra or overriding device profiles
    pub devices: Option<Vec<DeviceEntry>>,
    /// Whether the built-in Nexus 6 / 6P profiles are kept (default: true)
    pub builtin_devices: Option<bool>,
    pub adb_path: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A device codename and the first patch level that fixes it.
#[derive(Debug, Deserialize)]
pub struct DeviceEntry {
    pub device_id: String,
    pub patched_on: String,
    pub name: Option<String>,
}

impl ConfigFile {
    /// Builds the effective profile table: built-ins (unless disabled) plus configured devices
    pub fn device_profiles(&self) -> Result<DeviceProfiles> {
        let mut profiles = if self.builtin_devices.unwrap_or(true) {
            DeviceProfiles::builtin()
        } else {
            DeviceProfiles::empty()
        };

        for (i, entry) in self.devices.iter().flatten().enumerate() {
            let patched_on = PatchDate::parse(entry.patched_on.trim()).ok_or_else(|| {
                anyhow::anyhow!(
                    "devices[{}].patched_on '{}' is not a YYYY-MM-DD date",
                    i,
                    entry.patched_on
                )
            })?;
            let profile = DeviceProfile::new(entry.device_id.clone(), entry.name.clone(), patched_on)
                .with_context(|| format!("devices[{}] is invalid", i))?;
            profiles.insert(profile);
        }

        Ok(profiles)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let invalid = |details: String, hint: &str| CheckerError::InvalidConfig {
        path: path.to_path_buf(),
        details,
        hint: hint.to_string(),
    };

    if let Some(format) = config.format.as_deref() {
        OutputFormat::from_str(format)
            .map_err(|e| invalid(e, "Use one of: text, json, markdown"))?;
    }

    if config.timeout_secs == Some(0) {
        return Err(invalid(
            "timeout_secs must be greater than 0".to_string(),
            "Remove the field to use the default of 15 seconds",
        )
        .into());
    }

    config.device_profiles().map_err(|e| {
        invalid(
            format!("{:#}", e),
            "Each devices entry needs a non-empty 'device_id' and a 'patched_on' date (e.g. \"2016-11-05\")",
        )
    })?;

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
