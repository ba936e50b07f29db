//! End-to-end tests for the `lvlog` binary.

#![cfg(feature = "cli")]

use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the binary against a config file in a fresh temp dir, so the user's
/// own config never leaks in.
fn run(config: &str, args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lvlog.toml");
    std::fs::write(&path, config).unwrap();
    Command::new(env!("CARGO_BIN_EXE_lvlog"))
        .arg("--config")
        .arg(&path)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const PLAIN: &str = "[output]\ncolor = \"never\"\nflags = []\n";

#[test]
fn info_line_on_stdout() {
    let output = run(PLAIN, &["info", "service", "started"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "I service started\n");
}

#[test]
fn output_level_flag_filters() {
    let output = run(PLAIN, &["--output-level", "warn", "info", "quiet"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn unknown_level_uses_default_level() {
    let config = "[general]\ndefault_level = \"error\"\n[output]\ncolor = \"never\"\nflags = []\n";
    let output = run(config, &["notice", "via", "print"]);
    assert_eq!(stdout(&output), "E via print\n");
}

#[test]
fn forced_color_and_flags_from_command_line() {
    let output = run(PLAIN, &["--color", "always", "--flags", "msgprefix", "warn", "w"]);
    assert_eq!(stdout(&output), "\x1b[0;33mW \x1b[0;mw\n");
}

#[test]
fn stderr_target() {
    let config = "[output]\ntarget = \"stderr\"\ncolor = \"never\"\nflags = []\n";
    let output = run(config, &["error", "bad"]);
    assert_eq!(stdout(&output), "");
    assert!(String::from_utf8_lossy(&output.stderr).contains("E bad\n"));
}

#[test]
fn fatal_exits_with_status_one() {
    let output = run(PLAIN, &["fatal", "cannot", "continue"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "F cannot continue\n");
}

#[test]
fn broken_config_fails() {
    let output = run("[general", &["info", "x"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("lvlog: "));
}

#[test]
fn missing_message_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_lvlog"))
        .arg("info")
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn verbose_reports_config_handling_on_stderr() {
    let output = run(PLAIN, &["-v", "info", "x"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "I x\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("lvlog: Logger: target=stdout"));
}
