/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests run the binary inside a temporary directory so that config
/// auto-discovery sees only the files written by the test.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a getprop dump for a device into the directory.
fn write_dump(dir: &Path, codename: &str, boot_mode: &str, patch_level: &str) -> PathBuf {
    let dump = format!(
        "[ro.boot.mode]: [{}]\n[ro.build.version.security_patch]: [{}]\n[ro.product.device]: [{}]\n",
        boot_mode, patch_level, codename
    );
    let path = dir.join("getprop.txt");
    fs::write(&path, dump).unwrap();
    path
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_discovered_config_sets_format() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path(), "angler", "normal", "2017-01-05");
    write_config(
        &dir.path().join("bootmode-checker.config.yml"),
        "format: json\n",
    );

    let output = cargo_bin_cmd!("bootmode-checker")
        .current_dir(dir.path())
        .args(["--dump", "getprop.txt", "-q"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["verdict"]["vulnerability"], "patched");
}

#[test]
fn test_cli_format_overrides_config() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path(), "angler", "normal", "2017-01-05");
    write_config(
        &dir.path().join("bootmode-checker.config.yml"),
        "format: json\n",
    );

    cargo_bin_cmd!("bootmode-checker")
        .current_dir(dir.path())
        .args(["--dump", "getprop.txt", "-f", "markdown", "-q"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("# CVE-2016-8467"));
}

#[test]
fn test_configured_device_profile() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path(), "bullhead", "normal", "2016-12-05");
    write_config(
        &dir.path().join("bootmode-checker.config.yml"),
        r#"
devices:
  - device_id: bullhead
    name: Nexus 5X
    patched_on: "2017-01-05"
"#,
    );

    cargo_bin_cmd!("bootmode-checker")
        .current_dir(dir.path())
        .args(["--dump", "getprop.txt", "--no-color", "-q"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Nexus 5X"))
        .stdout(predicate::str::contains("VULNERABLE"));
}

#[test]
fn test_builtin_devices_disabled() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path(), "shamu", "normal", "2016-01-01");
    write_config(
        &dir.path().join("bootmode-checker.config.yml"),
        "builtin_devices: false\n",
    );

    cargo_bin_cmd!("bootmode-checker")
        .current_dir(dir.path())
        .args(["--dump", "getprop.txt", "--no-color", "-q"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("NOT APPLICABLE"));
}

#[test]
fn test_list_devices_includes_configured() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("bootmode-checker.config.yml"),
        r#"
devices:
  - device_id: marlin
    patched_on: "2017-02-05"
"#,
    );

    cargo_bin_cmd!("bootmode-checker")
        .current_dir(dir.path())
        .arg("--list-devices")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("marlin"))
        .stdout(predicate::str::contains("shamu"));
}

#[test]
fn test_unknown_config_field_warns() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path(), "angler", "normal", "2017-01-05");
    write_config(
        &dir.path().join("bootmode-checker.config.yml"),
        "check_license: true\n",
    );

    cargo_bin_cmd!("bootmode-checker")
        .current_dir(dir.path())
        .args(["--dump", "getprop.txt", "-q"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Unknown config field 'check_license'"));
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let dump = write_dump(dir.path(), "angler", "normal", "2017-01-05");
    let config_path = dir.path().join("custom.yml");
    write_config(&config_path, "format: json\n");

    let output = cargo_bin_cmd!("bootmode-checker")
        .args(["--dump", dump.to_str().unwrap(), "-q"])
        .args(["-c", config_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
}

#[test]
fn test_explicit_config_missing() {
    cargo_bin_cmd!("bootmode-checker")
        .args(["-c", "/nonexistent/bootmode-checker.config.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_config_is_application_error() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("bootmode-checker.config.yml"),
        r#"
devices:
  - device_id: bullhead
    patched_on: next year
"#,
    );

    cargo_bin_cmd!("bootmode-checker")
        .current_dir(dir.path())
        .arg("--list-devices")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("devices[0].patched_on"));
}

// ============================================================================
// Output file
// ============================================================================

#[test]
fn test_output_file_written() {
    let dir = TempDir::new().unwrap();
    let dump = write_dump(dir.path(), "shamu", "recovery", "2016-11-05");
    let report = dir.path().join("report.md");

    cargo_bin_cmd!("bootmode-checker")
        .args(["--dump", dump.to_str().unwrap(), "-f", "md"])
        .args(["-o", report.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Report written"));

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.contains("BOOTMODE TAMPERED"));
    assert!(content.contains("PATCHED"));
}

#[test]
fn test_quiet_output_file_writes_nothing_to_stderr() {
    let dir = TempDir::new().unwrap();
    let dump = write_dump(dir.path(), "angler", "normal", "2017-01-05");
    let report = dir.path().join("report.txt");

    cargo_bin_cmd!("bootmode-checker")
        .args(["--dump", dump.to_str().unwrap(), "-q"])
        .args(["-o", report.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::is_empty());

    assert!(fs::read_to_string(&report).unwrap().contains("PATCHED"));
}
