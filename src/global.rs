//! Process-wide default logger and free functions over it.
//!
//! This is a thin facade over one [`LogContext`]. Ordering:
//!
//! 1. Optionally call [`install`] once, early in `main`, with a fully
//!    configured context (caller offset included).
//! 2. Use the free functions. The first use without a prior `install` creates
//!    a stdout logger with [`Flags::STD`](crate::fmt::Flags::STD) and
//!    [`Flags::SHORT_FILE`](crate::fmt::Flags::SHORT_FILE).
//!
//! There is no teardown: the instance lives until the process exits and every
//! line is flushed as it is written.
//!
//! The free functions are `#[track_caller]`, so they report the location of
//! their own caller without any caller offset on the default instance.

use crate::context::LogContext;
use crate::level::Level;
use crate::logger::LeveledLogger;
use crate::prelude::*;
use std::fmt;
use std::sync::OnceLock;

static CONTEXT: OnceLock<LogContext> = OnceLock::new();

/// Installs the process-wide context.
///
/// # Errors
/// [`crate::Error::AlreadyInstalled`] if a context was installed before or
/// the default one was already created by an earlier log call.
pub fn install(context: LogContext) -> Result<(), crate::Error> {
    CONTEXT
        .set(context)
        .map_err(|_| crate::Error::AlreadyInstalled)
}

/// The installed context, creating the stdout default on first use.
pub fn context() -> &'static LogContext {
    CONTEXT.get_or_init(LogContext::stdout)
}

pub fn default_logger() -> &'static LeveledLogger {
    context().logger()
}

#[track_caller]
pub fn print(message: &str) {
    default_logger().print(message);
}

#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    default_logger().printf(args);
}

#[track_caller]
pub fn println(message: &str) {
    default_logger().println(message);
}

#[track_caller]
pub fn print_depth(depth: usize, message: &str) {
    default_logger().print_depth(depth, message);
}

#[track_caller]
pub fn printf_depth(depth: usize, args: fmt::Arguments<'_>) {
    default_logger().printf_depth(depth, args);
}

#[track_caller]
pub fn println_depth(depth: usize, message: &str) {
    default_logger().println_depth(depth, message);
}

#[track_caller]
pub fn debug(message: &str) {
    default_logger().debug(message);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

#[track_caller]
pub fn debug_depth(depth: usize, message: &str) {
    default_logger().debug_depth(depth, message);
}

#[track_caller]
pub fn debugf_depth(depth: usize, args: fmt::Arguments<'_>) {
    default_logger().debugf_depth(depth, args);
}

#[track_caller]
pub fn debugln(message: &str) {
    default_logger().debugln(message);
}

#[track_caller]
pub fn debugln_depth(depth: usize, message: &str) {
    default_logger().debugln_depth(depth, message);
}

#[track_caller]
pub fn info(message: &str) {
    default_logger().info(message);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

#[track_caller]
pub fn info_depth(depth: usize, message: &str) {
    default_logger().info_depth(depth, message);
}

#[track_caller]
pub fn infof_depth(depth: usize, args: fmt::Arguments<'_>) {
    default_logger().infof_depth(depth, args);
}

#[track_caller]
pub fn infoln(message: &str) {
    default_logger().infoln(message);
}

#[track_caller]
pub fn infoln_depth(depth: usize, message: &str) {
    default_logger().infoln_depth(depth, message);
}

#[track_caller]
pub fn warn(message: &str) {
    default_logger().warn(message);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

#[track_caller]
pub fn warn_depth(depth: usize, message: &str) {
    default_logger().warn_depth(depth, message);
}

#[track_caller]
pub fn warnf_depth(depth: usize, args: fmt::Arguments<'_>) {
    default_logger().warnf_depth(depth, args);
}

#[track_caller]
pub fn warnln(message: &str) {
    default_logger().warnln(message);
}

#[track_caller]
pub fn warnln_depth(depth: usize, message: &str) {
    default_logger().warnln_depth(depth, message);
}

#[track_caller]
pub fn error(message: &str) {
    default_logger().error(message);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

#[track_caller]
pub fn error_depth(depth: usize, message: &str) {
    default_logger().error_depth(depth, message);
}

#[track_caller]
pub fn errorf_depth(depth: usize, args: fmt::Arguments<'_>) {
    default_logger().errorf_depth(depth, args);
}

#[track_caller]
pub fn errorln(message: &str) {
    default_logger().errorln(message);
}

#[track_caller]
pub fn errorln_depth(depth: usize, message: &str) {
    default_logger().errorln_depth(depth, message);
}

/// Logs at FATAL and exits the process with status 1.
#[track_caller]
pub fn fatal(message: &str) -> ! {
    default_logger().fatal(message)
}

/// Logs at FATAL and exits the process with status 1.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}

#[track_caller]
pub fn fatal_depth(depth: usize, message: &str) -> ! {
    default_logger().fatal_depth(depth, message)
}

#[track_caller]
pub fn fatalf_depth(depth: usize, args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf_depth(depth, args)
}

#[track_caller]
pub fn fatalln(message: &str) -> ! {
    default_logger().fatalln(message)
}

#[track_caller]
pub fn fatalln_depth(depth: usize, message: &str) -> ! {
    default_logger().fatalln_depth(depth, message)
}

pub fn default_level() -> Level {
    default_logger().default_level()
}

pub fn set_default_level(level: Level) {
    default_logger().set_default_level(level);
}

pub fn output_level() -> Level {
    default_logger().output_level()
}

pub fn set_output_level(level: Level) {
    default_logger().set_output_level(level);
}
