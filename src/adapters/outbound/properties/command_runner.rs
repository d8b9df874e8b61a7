use crate::shared::error::CheckerError;
use crate::shared::Result;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// A property-reading subprocess invocation
pub(super) struct PropertyCommand<'a> {
    pub program: &'a Path,
    pub args: Vec<&'a str>,
    pub timeout: Duration,
    /// Name used in error messages ("adb", "local getprop")
    pub source_name: &'a str,
    /// Hint shown when the command cannot be run or fails
    pub hint: &'a str,
}

impl PropertyCommand<'_> {
    /// Runs the command and returns its stdout
    ///
    /// The child is killed if the timeout elapses.
    pub async fn run(&self) -> Result<String> {
        let mut command = Command::new(self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = timeout(self.timeout, command.output())
            .await
            .map_err(|_| CheckerError::PropertySourceTimeout {
                source_name: self.source_name.to_string(),
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|e| CheckerError::PropertySourceFailed {
                source_name: self.source_name.to_string(),
                details: format!("Failed to run {}: {}", self.program.display(), e),
                hint: self.hint.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let details = match stderr.trim() {
                "" => format!("{} exited with {}", self.program.display(), output.status),
                message => message.to_string(),
            };
            return Err(CheckerError::PropertySourceFailed {
                source_name: self.source_name.to_string(),
                details,
                hint: self.hint.to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
