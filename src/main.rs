use bootmode_checker::adapters::outbound::console::{
    SilentProgressReporter, StderrProgressReporter,
};
use bootmode_checker::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use bootmode_checker::adapters::outbound::properties::{
    AdbPropertySource, GetpropDumpReader, LocalGetpropSource, StaticPropertySource,
    DEFAULT_ADB_PATH, DEFAULT_GETPROP_PATH, DEFAULT_TIMEOUT_SECS,
};
use bootmode_checker::application::dto::{CheckRequest, OutputFormat};
use bootmode_checker::application::factories::FormatterFactory;
use bootmode_checker::application::use_cases::CheckDeviceUseCase;
use bootmode_checker::boot_check::domain::{DeviceProfiles, SnapshotOverrides};
use bootmode_checker::boot_check::services::PatchLevelEvaluator;
use bootmode_checker::cli::Args;
use bootmode_checker::config::{self, ConfigFile};
use bootmode_checker::ports::outbound::{DevicePropertySource, OutputPresenter, ProgressReporter};
use bootmode_checker::shared::error::ExitCode;
use bootmode_checker::shared::Result;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let profiles = config
        .as_ref()
        .map(ConfigFile::device_profiles)
        .transpose()?
        .unwrap_or_else(DeviceProfiles::builtin);

    if args.list_devices {
        StdoutPresenter::new().present(&render_profiles(&profiles))?;
        return Ok(ExitCode::Success);
    }

    // CLI > config file > default
    let format = args
        .format
        .or_else(|| config.as_ref().and_then(ConfigFile::output_format))
        .unwrap_or_default();
    let use_color = color_enabled(&args, format, io::stdout().is_terminal());

    let property_source = select_property_source(&args, config.as_ref());
    let progress_reporter: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(StderrProgressReporter::new())
    };

    let use_case = CheckDeviceUseCase::new(
        property_source,
        PatchLevelEvaluator::new(profiles),
        progress_reporter,
    );

    let request = CheckRequest::new(SnapshotOverrides {
        device_id: args.device.clone(),
        boot_mode: args.boot_mode.clone(),
        patch_level: args.patch_level.clone(),
    });

    let response = use_case.execute(request).await?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }

    let formatter = FormatterFactory::create(format, use_color);
    let formatted_output = formatter.format(&response)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output.as_deref() {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)).with_quiet(args.quiet))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(response.exit_code())
}

/// Loads the config from `--config`, or auto-discovers it in the working directory
fn load_config(explicit_path: Option<&str>) -> Result<Option<ConfigFile>> {
    match explicit_path {
        Some(path) => config::load_config_from_path(Path::new(path)).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

/// Colors are only written for text reports going to an interactive stdout
fn color_enabled(args: &Args, format: OutputFormat, stdout_is_terminal: bool) -> bool {
    !args.no_color && args.output.is_none() && format == OutputFormat::Text && stdout_is_terminal
}

fn select_property_source(
    args: &Args,
    config: Option<&ConfigFile>,
) -> Box<dyn DevicePropertySource> {
    let timeout = Duration::from_secs(
        args.timeout
            .or_else(|| config.and_then(|c| c.timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    );

    if let Some(dump) = args.dump.as_deref() {
        Box::new(GetpropDumpReader::new(PathBuf::from(dump)))
    } else if args.use_adb() {
        let adb_path = args
            .adb_path
            .clone()
            .or_else(|| config.and_then(|c| c.adb_path.clone()))
            .unwrap_or_else(|| DEFAULT_ADB_PATH.to_string());
        Box::new(AdbPropertySource::new(
            PathBuf::from(adb_path),
            args.serial.clone(),
            timeout,
        ))
    } else if args.local {
        Box::new(LocalGetpropSource::new(
            PathBuf::from(DEFAULT_GETPROP_PATH),
            timeout,
        ))
    } else {
        // Only the command line overrides describe the device
        Box::new(StaticPropertySource::empty())
    }
}

fn render_profiles(profiles: &DeviceProfiles) -> String {
    let mut output = format!("{:<12} {:<12} {}\n", "CODENAME", "PATCHED ON", "NAME");
    for profile in profiles.iter() {
        output.push_str(&format!(
            "{:<12} {:<12} {}\n",
            profile.device_id(),
            profile.patched_on().to_string(),
            profile.name().unwrap_or("-")
        ));
    }
    output
}
