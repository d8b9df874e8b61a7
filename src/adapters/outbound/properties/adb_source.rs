use super::command_runner::PropertyCommand;
use super::getprop_parser::parse_getprop_output;
use crate::boot_check::domain::DeviceProperties;
use crate::ports::outbound::DevicePropertySource;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Default adb executable, resolved through PATH
pub const DEFAULT_ADB_PATH: &str = "adb";

/// Default timeout for property reads in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const ADB_HINT: &str = "Make sure adb is installed, the device is connected with USB debugging enabled, \
                        and pass --serial when more than one device is attached";

/// AdbPropertySource adapter: runs `adb [-s SERIAL] shell getprop`
pub struct AdbPropertySource {
    adb_path: PathBuf,
    serial: Option<String>,
    timeout: Duration,
}

impl AdbPropertySource {
    pub fn new(adb_path: PathBuf, serial: Option<String>, timeout: Duration) -> Self {
        Self {
            adb_path,
            serial,
            timeout,
        }
    }

    fn args(&self) -> Vec<&str> {
        let mut args = Vec::with_capacity(4);
        if let Some(serial) = &self.serial {
            args.push("-s");
            args.push(serial.as_str());
        }
        args.push("shell");
        args.push("getprop");
        args
    }
}

impl Default for AdbPropertySource {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_ADB_PATH),
            None,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[async_trait]
impl DevicePropertySource for AdbPropertySource {
    fn describe(&self) -> String {
        match &self.serial {
            Some(serial) => format!("adb ({})", serial),
            None => "adb".to_string(),
        }
    }

    async fn read_properties(&self) -> Result<DeviceProperties> {
        let output = PropertyCommand {
            program: &self.adb_path,
            args: self.args(),
            timeout: self.timeout,
            source_name: "adb",
            hint: ADB_HINT,
        }
        .run()
        .await?;

        Ok(parse_getprop_output(&output))
    }
}
