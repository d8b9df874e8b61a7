use crate::boot_check::domain::SnapshotOverrides;

/// CheckRequest - request DTO for the device check use case
#[derive(Debug, Clone, Default)]
pub struct CheckRequest {
    /// Values that take precedence over what the property source reports
    pub overrides: SnapshotOverrides,
}

impl CheckRequest {
    pub fn new(overrides: SnapshotOverrides) -> Self {
        Self { overrides }
    }

    pub fn builder() -> CheckRequestBuilder {
        CheckRequestBuilder::default()
    }
}

/// Builder for `CheckRequest`
#[derive(Debug, Default)]
pub struct CheckRequestBuilder {
    overrides: SnapshotOverrides,
}

impl CheckRequestBuilder {
    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.overrides.device_id = Some(device_id.into());
        self
    }

    pub fn boot_mode(mut self, boot_mode: impl Into<String>) -> Self {
        self.overrides.boot_mode = Some(boot_mode.into());
        self
    }

    pub fn patch_level(mut self, patch_level: impl Into<String>) -> Self {
        self.overrides.patch_level = Some(patch_level.into());
        self
    }

    pub fn build(self) -> CheckRequest {
        CheckRequest::new(self.overrides)
    }
}
