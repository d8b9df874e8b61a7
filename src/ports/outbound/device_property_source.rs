use crate::boot_check::domain::DeviceProperties;
use crate::shared::Result;
use async_trait::async_trait;

/// DevicePropertySource port for obtaining system properties from a device
///
/// Implementations talk to the outside world (adb, the on-device `getprop`
/// binary, a saved dump). The evaluator never sees this port; it only gets
/// the strings extracted from the returned properties.
#[async_trait]
pub trait DevicePropertySource: Send + Sync {
    /// Short human-readable name of the source, used in progress and error messages
    fn describe(&self) -> String;

    /// Reads all available system properties
    ///
    /// # Errors
    /// Returns an error if:
    /// - The underlying command cannot be spawned or exits unsuccessfully
    /// - The command does not finish within the configured timeout
    /// - A dump file is missing, unreadable, or fails safety checks
    async fn read_properties(&self) -> Result<DeviceProperties>;
}

#[async_trait]
impl DevicePropertySource for Box<dyn DevicePropertySource> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn read_properties(&self) -> Result<DeviceProperties> {
        (**self).read_properties().await
    }
}
