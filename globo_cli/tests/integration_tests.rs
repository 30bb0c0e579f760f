//! Integration tests for the globo binary.
//!
//! These tests exercise the CLI surface: program selection, weekday
//! overrides, rest-day behavior and config handling. Delivery transports
//! are not touched; rest days must exit 0 without any network activity.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to get the CLI with a hermetic config environment
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("globo"));
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env_remove("TODOIST_API_TOKEN");
    cmd
}

fn config_home() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_cli_help() {
    let home = config_home();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily workout reminder"));
}

#[test]
fn test_preview_workout_day() {
    let home = config_home();
    cli(&home)
        .arg("preview")
        .arg("--program")
        .arg("ws4sb")
        .arg("--weekday")
        .arg("mon")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKOUT: Max-Effort Upper Body"))
        .stdout(predicate::str::contains("warm up"))
        .stdout(predicate::str::contains("**Max-Effort Exercise**"));
}

#[test]
fn test_preview_is_default_command() {
    let home = config_home();
    cli(&home)
        .arg("--program")
        .arg("ws4sb")
        .arg("--weekday")
        .arg("sat")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKOUT: Max-Effort Lower Body"));
}

#[test]
fn test_preview_rest_day() {
    let home = config_home();
    cli(&home)
        .arg("preview")
        .arg("--program")
        .arg("ws4sb")
        .arg("--weekday")
        .arg("sun")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest day"));
}

#[test]
fn test_email_rest_day_is_a_successful_noop() {
    let home = config_home();
    // No SMTP session is opened on a rest day, so the fake credentials
    // never matter.
    cli(&home)
        .arg("email")
        .arg("--program")
        .arg("ws4sb")
        .arg("--weekday")
        .arg("tue")
        .arg("--username")
        .arg("nobody@example.com")
        .arg("--app-password")
        .arg("hunter2")
        .arg("--recipients")
        .arg("a@example.com,b@example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest day"));
}

#[test]
fn test_unknown_program_fails() {
    let home = config_home();
    cli(&home)
        .arg("preview")
        .arg("--program")
        .arg("leg_day")
        .assert()
        .failure()
        .stderr(predicate::str::contains("leg_day"));
}

#[test]
fn test_unknown_weekday_fails() {
    let home = config_home();
    cli(&home)
        .arg("preview")
        .arg("--program")
        .arg("ws4sb")
        .arg("--weekday")
        .arg("someday")
        .assert()
        .failure()
        .stderr(predicate::str::contains("someday"));
}

#[test]
fn test_todoist_without_token_fails() {
    let home = config_home();
    cli(&home)
        .arg("todoist")
        .arg("--program")
        .arg("ws4sb")
        .arg("--weekday")
        .arg("mon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Todoist API token"));
}

#[test]
fn test_config_file_selects_default_program() {
    let home = config_home();
    let config_path = home.path().join("config.toml");
    std::fs::write(&config_path, "[program]\ndefault = \"ws4sb\"\n").unwrap();

    cli(&home)
        .arg("preview")
        .arg("--config")
        .arg(&config_path)
        .arg("--weekday")
        .arg("wed")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKOUT: Dynamic-Effort Lower Body"));
}

#[test]
fn test_program_flag_overrides_config() {
    let home = config_home();
    let config_path = home.path().join("config.toml");
    std::fs::write(&config_path, "[program]\ndefault = \"ws4sb\"\n").unwrap();

    cli(&home)
        .arg("preview")
        .arg("--config")
        .arg(&config_path)
        .arg("--program")
        .arg("basic-strength")
        .arg("--weekday")
        .arg("sat")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKOUT: Stretch Workout"));
}

#[test]
fn test_default_program_schedules_dumbbell_days() {
    let home = config_home();
    // Built-in default program is the dumbbell stop-gap; Monday is a
    // lifting day regardless of which A/B week this is.
    cli(&home)
        .arg("preview")
        .arg("--weekday")
        .arg("mon")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKOUT: Dumbbell Workout"));
}
