#![forbid(unsafe_code)]

//! `lvlog` - leveled logging with accurate caller locations.
//!
//! A [`LeveledLogger`] writes one line per call to a single [`Sink`], with:
//! - five severities (`DEBUG` < `INFO` < `WARN` < `ERROR` < `FATAL`), each with
//!   its own `"D "`/`"I "`/… label, ANSI-colored on color terminals
//! - a run-time output threshold and default level, both lock-free atomics
//! - the caller's `file:line`, correct even through wrapper functions when the
//!   `*_depth` variants or a caller offset are used
//! - fatal calls that always terminate the process
//!
//! # Example
//!
//! ```
//! use lvlog::prelude::*;
//! use lvlog::{Flags, Level, LeveledLogger, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let logger = LeveledLogger::with_color(Arc::new(sink.clone()), Flags::NONE, false);
//!
//! logger.set_output_level(Level::Info);
//! logger.debug("Output level is INFO.");
//! logger.info("Thus debug is not printed.");
//!
//! logger.set_output_level(Level::Debug);
//! logger.debug("The above line enables debug.");
//!
//! assert_eq!(
//!     sink.contents(),
//!     "I Thus debug is not printed.\nD The above line enables debug.\n"
//! );
//! ```
//!
//! # Release builds
//!
//! Wrapper-aware caller reporting (`*_depth` calls and caller offsets) reads
//! line tables from the running binary. Cargo's default release profile has
//! none; add
//!
//! ```toml
//! [profile.release]
//! debug = "line-tables-only"
//! ```
//!
//! or those lines report `???:0` (with a one-time warning on stderr). Direct
//! calls never need it.
//!
//! # Features
//!
//! - `cli` (default): the `lvlog` command line tool

pub mod config;
pub mod context;
mod error;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use context::LogContext;
pub use error::Error;
pub use fmt::Flags;
pub use level::Level;
pub use logger::{
    CALLER_BASE_DEPTH, CallerOffsetter, DebugLogger, ErrorLogger, FATAL_EXIT_CODE, FatalLogger,
    InfoLogger, LeveledLogger, LeveledLoggerBuilder, Leveler, Logger, PrintLogger, WarnLogger,
};
pub use output::{ColorMode, FileSink, MemorySink, Sink, StderrSink, StdoutSink, WriterSink};

/// All logging capability traits, for `use lvlog::prelude::*`.
pub mod prelude {
    pub use crate::logger::{
        CallerOffsetter, DebugLogger, ErrorLogger, FatalLogger, InfoLogger, Leveler, Logger,
        PrintLogger, WarnLogger,
    };
}
