//! Building loggers from config files.

use lvlog::config::Target;
use lvlog::prelude::*;
use lvlog::{Config, Error, Flags, Level, LeveledLogger};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("lvlog.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.parse_default_level(), Level::Info);
    assert_eq!(config.target(), Target::Stdout);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[general\noutput_level = ");
    assert!(matches!(Config::load_from(&path), Err(Error::ConfigParse(_))));
}

#[test]
fn mistyped_field_is_a_parse_error() {
    let result = Config::from_toml("[general]\ncaller_offset = \"two\"\n");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn all_fields_are_read() {
    let config = Config::from_toml(
        r#"
[general]
default_level = "warn"
output_level = "error"
caller_offset = 2

[output]
target = "stderr"
color = "never"
flags = ["time", "microseconds", "utc", "longfile", "bogus"]
"#,
    )
    .unwrap();

    assert_eq!(config.parse_default_level(), Level::Warn);
    assert_eq!(config.parse_output_level(), Level::Error);
    assert_eq!(config.general.caller_offset, 2);
    assert_eq!(config.target(), Target::Stderr);
    assert_eq!(config.parse_color(), lvlog::ColorMode::Never);
    assert_eq!(
        config.parse_flags(),
        Flags::TIME | Flags::MICROSECONDS | Flags::UTC | Flags::LONG_FILE
    );
}

#[test]
fn file_target_logger_appends_lines() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("nested").join("app.log");
    let config_path = write_config(
        &dir,
        &format!(
            "[general]\noutput_level = \"warn\"\ncaller_offset = 0\n\n\
             [output]\ntarget = '{}'\ncolor = \"always\"\nflags = [\"shortfile\"]\n",
            log_path.display()
        ),
    );

    let config = Config::load_from(&config_path).unwrap();
    let logger = LeveledLogger::from_config(&config).unwrap();
    assert_eq!(logger.output_level(), Level::Warn);

    logger.info("not written");
    let line = line!() + 1;
    logger.warn("written");
    logger.flush().unwrap();

    let content = fs::read_to_string(&log_path).unwrap();
    assert_eq!(
        content,
        format!("\x1b[0;33mW \x1b[0;mconfig.rs:{line}: written\n")
    );
}

#[test]
fn caller_offset_from_config_sets_depth() {
    let config = Config::from_toml("[general]\ncaller_offset = 3\n").unwrap();
    let logger = LeveledLogger::from_config(&config).unwrap();
    assert_eq!(logger.caller_depth(), 3 + lvlog::CALLER_BASE_DEPTH);
}
