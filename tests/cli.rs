use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".weather-dash").join("config.json")
}

const BINARY_NAME: &str = "weather-dash";

fn command(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()); // simulate different $HOME
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let tmp = temp_home_dir();
    command(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Terminal weather dashboard"));
}

#[test]
/// A padded location is trimmed and shown as the panel title.
fn show_prints_trimmed_location_and_forecast() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["show", "--location", "  Paris  ", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(contains("Loading weather data..."))
        .stdout(contains("\nParis  "))
        .stdout(contains("5-Day Forecast"))
        .stdout(contains("Today"))
        .stdout(contains("Tomorrow"));
}

#[test]
/// A failed load shows the generic message and the retry control.
fn show_reports_failure_with_retry_control() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["show", "--delay-ms", "0", "--failure-rate", "1"])
        .assert()
        .failure()
        .stdout(contains("Failed to load weather data"))
        .stdout(contains("[ Try Again ]"))
        .stderr(contains("Weather data unavailable for New York"));
}

#[test]
/// The configured default location is used when no flag is given.
fn show_uses_configured_location() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(
        &config_path,
        r#"{ "default_location": "Wellington", "delay_ms": 0 }"#,
    )
    .unwrap();

    command(&tmp)
        .arg("show")
        .assert()
        .success()
        .stdout(contains("Wellington"));
}

#[test]
/// `config --init` writes the defaults once.
fn config_init_creates_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    command(&tmp)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(contains("Wrote default configuration."))
        .stdout(contains("\"default_location\": \"New York\""));

    assert!(config_path.exists());
}

#[test]
/// An unreadable config file is reported rather than silently replaced.
fn invalid_config_is_an_error() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "invalid json").unwrap();

    command(&tmp)
        .arg("config")
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}
