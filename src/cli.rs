use clap::Parser;

use crate::application::dto::OutputFormat;

/// Check an Android device for CVE-2016-8467 and a tampered boot mode
#[derive(Parser, Debug)]
#[command(name = "bootmode-checker")]
#[command(version)]
#[command(
    about = "Check Nexus 6/6P devices for CVE-2016-8467 and detect a tampered ro.boot.mode",
    long_about = None
)]
pub struct Args {
    /// Read properties from a device over adb
    #[arg(long, conflicts_with_all = ["local", "dump"])]
    pub adb: bool,

    /// Serial of the adb device to query (implies --adb)
    #[arg(short, long, conflicts_with_all = ["local", "dump"])]
    pub serial: Option<String>,

    /// Read properties with the on-device getprop binary
    #[arg(long, conflicts_with = "dump")]
    pub local: bool,

    /// Read properties from a saved `getprop` dump file
    #[arg(long, value_name = "FILE")]
    pub dump: Option<String>,

    /// Device codename (overrides ro.product.device)
    #[arg(long, value_name = "CODENAME")]
    pub device: Option<String>,

    /// Boot mode (overrides ro.boot.mode)
    #[arg(long, value_name = "MODE")]
    pub boot_mode: Option<String>,

    /// Security patch level, YYYY-MM-DD (overrides ro.build.version.security_patch)
    #[arg(long, value_name = "DATE")]
    pub patch_level: Option<String>,

    /// Output format: text, json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to config file (auto-discovers bootmode-checker.config.yml if not specified)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Path to the adb executable
    #[arg(long, value_name = "PATH")]
    pub adb_path: Option<String>,

    /// Timeout in seconds for reading properties from a device
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the known device profiles and exit
    #[arg(long)]
    pub list_devices: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether adb was requested explicitly or implied by --serial
    pub fn use_adb(&self) -> bool {
        self.adb || self.serial.is_some()
    }
}
