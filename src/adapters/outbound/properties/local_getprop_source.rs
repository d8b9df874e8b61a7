use super::command_runner::PropertyCommand;
use super::getprop_parser::parse_getprop_output;
use crate::boot_check::domain::DeviceProperties;
use crate::ports::outbound::DevicePropertySource;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Property reader binary on an Android device
pub const DEFAULT_GETPROP_PATH: &str = "/system/bin/getprop";

const LOCAL_HINT: &str =
    "--local only works when running on the Android device itself (e.g. from a terminal app); use --adb from a computer";

/// LocalGetpropSource adapter: runs `getprop` on the device this process runs on
pub struct LocalGetpropSource {
    getprop_path: PathBuf,
    timeout: Duration,
}

impl LocalGetpropSource {
    pub fn new(getprop_path: PathBuf, timeout: Duration) -> Self {
        Self {
            getprop_path,
            timeout,
        }
    }
}

#[async_trait]
impl DevicePropertySource for LocalGetpropSource {
    fn describe(&self) -> String {
        format!("local getprop ({})", self.getprop_path.display())
    }

    async fn read_properties(&self) -> Result<DeviceProperties> {
        let output = PropertyCommand {
            program: &self.getprop_path,
            args: Vec::new(),
            timeout: self.timeout,
            source_name: "local getprop",
            hint: LOCAL_HINT,
        }
        .run()
        .await?;

        Ok(parse_getprop_output(&output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let source = LocalGetpropSource::new(
            PathBuf::from(DEFAULT_GETPROP_PATH),
            Duration::from_secs(5),
        );
        assert_eq!(source.describe(), "local getprop (/system/bin/getprop)");
    }

    #[tokio::test]
    async fn test_missing_getprop() {
        let source =
            LocalGetpropSource::new(PathBuf::from("/nonexistent/getprop"), Duration::from_secs(5));
        let err = source.read_properties().await.unwrap_err();
        assert!(err.to_string().contains("--adb from a computer"));
    }
}
