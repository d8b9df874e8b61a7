use crate::boot_check::domain::DeviceProperties;
use crate::ports::outbound::DevicePropertySource;
use crate::shared::Result;
use async_trait::async_trait;

/// StaticPropertySource adapter: a fixed set of properties
///
/// Used when the caller supplies every value on the command line and no
/// device is queried.
pub struct StaticPropertySource {
    properties: DeviceProperties,
}

impl StaticPropertySource {
    pub fn new(properties: DeviceProperties) -> Self {
        Self { properties }
    }

    pub fn empty() -> Self {
        Self::new(DeviceProperties::new())
    }
}

#[async_trait]
impl DevicePropertySource for StaticPropertySource {
    fn describe(&self) -> String {
        "command line".to_string()
    }

    async fn read_properties(&self) -> Result<DeviceProperties> {
        Ok(self.properties.clone())
    }
}
