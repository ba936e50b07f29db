//! Logger construction from an lvlog config file.

use super::LeveledLogger;
use crate::config::{Config, Target};
use crate::internal;
use crate::output::{FileSink, Sink, StderrSink, StdoutSink};
use std::sync::Arc;

impl LeveledLogger {
    /// Builds a logger from a loaded config.
    ///
    /// # Errors
    /// Fails only when a file target cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let sink: Arc<dyn Sink> = match config.target() {
            Target::Stdout => Arc::new(StdoutSink),
            Target::Stderr => Arc::new(StderrSink),
            Target::File(path) => Arc::new(FileSink::open(&path)?),
        };

        let flags = config.parse_flags();
        internal::debug(&format!(
            "Logger: target={}, flags={flags}, color={}, output_level={}",
            config.output.target,
            config.parse_color(),
            config.parse_output_level()
        ));

        Ok(Self::builder()
            .shared_sink(sink)
            .flags(flags)
            .color(config.parse_color())
            .default_level(config.parse_default_level())
            .output_level(config.parse_output_level())
            .caller_offset(config.general.caller_offset)
            .build())
    }

    /// [`LeveledLogger::from_config`] over [`Config::load`]; a broken config
    /// file falls back to defaults with a warning.
    ///
    /// # Errors
    /// Fails only when a file target cannot be opened.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn(&format!("Config ignored: {e}"));
            Config::default()
        });
        Self::from_config(&config)
    }
}
