use super::getprop_parser::parse_getprop_output;
use crate::boot_check::domain::DeviceProperties;
use crate::ports::outbound::DevicePropertySource;
use crate::shared::error::CheckerError;
use crate::shared::security::{validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// GetpropDumpReader adapter: reads a saved `getprop` dump
///
/// Lets a device be checked offline from `adb shell getprop > props.txt`.
pub struct GetpropDumpReader {
    path: PathBuf,
}

impl GetpropDumpReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_dump(&self) -> Result<String> {
        if !self.path.exists() && fs::symlink_metadata(&self.path).is_err() {
            return Err(CheckerError::DumpFileNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        validate_regular_file(&self.path, "getprop dump", MAX_FILE_SIZE)?;

        let bytes = fs::read(&self.path).map_err(|e| CheckerError::DumpFileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl DevicePropertySource for GetpropDumpReader {
    fn describe(&self) -> String {
        format!("dump file {}", self.path.display())
    }

    async fn read_properties(&self) -> Result<DeviceProperties> {
        let content = self.read_dump()?;
        Ok(parse_getprop_output(&content))
    }
}
