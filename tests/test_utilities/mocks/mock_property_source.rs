use async_trait::async_trait;
use bootmode_checker::prelude::*;

/// Mock DevicePropertySource for testing
pub struct MockPropertySource {
    pub properties: DeviceProperties,
    pub should_fail: bool,
}

impl MockPropertySource {
    pub fn new(properties: DeviceProperties) -> Self {
        Self {
            properties,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            properties: DeviceProperties::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl DevicePropertySource for MockPropertySource {
    fn describe(&self) -> String {
        "mock device".to_string()
    }

    async fn read_properties(&self) -> Result<DeviceProperties> {
        if self.should_fail {
            anyhow::bail!("Mock device read failure");
        }
        Ok(self.properties.clone())
    }
}
