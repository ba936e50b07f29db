//! Command line front end: log one line from a shell script.
//!
//! ```text
//! lvlog [-v] [--config PATH] [--output-level L] [--color MODE] [--flags LIST] <LEVEL> <MESSAGE>...
//! ```

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::LeveledLogger;
use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Color choice on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for crate::output::ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// lvlog - write a leveled log line.
#[derive(Debug, Parser)]
#[command(name = "lvlog", version, about = "Write a leveled log line")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Minimum level written (debug, info, warn, error, fatal)
    #[arg(long, value_name = "LEVEL")]
    pub output_level: Option<String>,
    /// Colored labels
    #[arg(long, value_enum)]
    pub color: Option<ColorArg>,
    /// Comma separated header flags (date,time,microseconds,utc,longfile,shortfile,msgprefix)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub flags: Option<Vec<String>>,
    /// Show lvlog's own diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Level of the line; anything unrecognized logs at the default level
    pub level: String,
    /// Message words, joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl Cli {
    /// Config file values with command line overrides applied on top.
    ///
    /// # Errors
    /// Config file read or parse errors.
    pub fn effective_config(&self) -> Result<Config, crate::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(level) = &self.output_level {
            config.general.output_level.clone_from(level);
        }
        if let Some(color) = self.color {
            config.output.color = crate::output::ColorMode::from(color).to_string();
        }
        if let Some(flags) = &self.flags {
            config.output.flags.clone_from(flags);
        }
        Ok(config)
    }
}

/// Runs one invocation. Fatal lines exit the process from inside this call.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    if cli.verbose {
        internal::init(Level::Debug);
    }

    let config = match cli.effective_config() {
        Ok(config) => config,
        Err(e) => {
            internal::error(&format!("Error loading config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let logger = match LeveledLogger::from_config(&config) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error(&format!("Cannot open log target: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let message = cli.message.join(" ");
    log_line(&logger, Level::parse(&cli.level), &message);

    if logger.write_failures() > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// NOT SET goes through the print family, i.e. the configured default level.
fn log_line(logger: &LeveledLogger, level: Level, message: &str) {
    match level {
        Level::NotSet => logger.print(message),
        Level::Debug => logger.debug(message),
        Level::Info => logger.info(message),
        Level::Warn => logger.warn(message),
        Level::Error => logger.error(message),
        Level::Fatal => logger.fatal(message),
    }
}
