//! lvlog's own diagnostics (config problems, failing sinks), reported on
//! stderr through a [`LeveledLogger`] like any other program's.
//!
//! Uses `OnceLock` so the logger is created exactly once. Until [`init`] says
//! otherwise only warnings and errors are shown.

use crate::fmt::Flags;
use crate::level::Level;
use crate::logger::{DebugLogger, ErrorLogger, InfoLogger, Leveler, LeveledLogger, WarnLogger};
use crate::output::StderrSink;
use std::sync::{Arc, OnceLock};

static INTERNAL_LOGGER: OnceLock<LeveledLogger> = OnceLock::new();

fn logger() -> &'static LeveledLogger {
    INTERNAL_LOGGER.get_or_init(|| {
        let logger = LeveledLogger::new(Arc::new(StderrSink), Flags::SHORT_FILE);
        logger.set_output_level(Level::Warn);
        logger
    })
}

/// Sets the threshold for lvlog's own diagnostics.
pub fn init(level: Level) {
    logger().set_output_level(level);
    debug(&format!("Internal log level: {level}"));
}

#[track_caller]
pub fn debug(msg: &str) {
    logger().debugf(format_args!("lvlog: {msg}"));
}

#[track_caller]
pub fn info(msg: &str) {
    logger().infof(format_args!("lvlog: {msg}"));
}

#[track_caller]
pub fn warn(msg: &str) {
    logger().warnf(format_args!("lvlog: {msg}"));
}

#[track_caller]
pub fn error(msg: &str) {
    logger().errorf(format_args!("lvlog: {msg}"));
}
