//! TOML configuration for building a logger without code changes.
//!
//! Separated from struct definitions so that the loading logic stays
//! independent of the serde schema.

mod structs;

pub use structs::{GeneralConfig, OutputConfig};

use crate::fmt::Flags;
use crate::internal;
use crate::level::Level;
use crate::output::ColorMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
}

/// Resolved `output.target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
    File(String),
}

impl Config {
    /// Loads the user's config from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is not valid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        internal::debug(&format!("Loading config from {}", path.display()));
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// # Errors
    /// Returns error on invalid TOML or mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/lvlog/lvlog.toml`, e.g. `~/.config/lvlog/lvlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "lvlog")
            .map(|dirs| dirs.config_dir().join("lvlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    #[must_use]
    pub fn parse_default_level(&self) -> Level {
        Level::parse(&self.general.default_level)
    }

    #[must_use]
    pub fn parse_output_level(&self) -> Level {
        Level::parse(&self.general.output_level)
    }

    #[must_use]
    pub fn parse_color(&self) -> ColorMode {
        self.output.color.parse().unwrap_or_default()
    }

    /// Unknown flag names are skipped with a warning rather than rejected.
    #[must_use]
    pub fn parse_flags(&self) -> Flags {
        let (flags, unknown) = Flags::from_names(self.output.flags.iter().map(String::as_str));
        for name in unknown {
            internal::warn(&format!("Unknown output flag ignored: {name}"));
        }
        flags
    }

    #[must_use]
    pub fn target(&self) -> Target {
        match self.output.target.trim() {
            "" | "stdout" | "-" => Target::Stdout,
            "stderr" => Target::Stderr,
            path => Target::File(path.to_string()),
        }
    }
}
