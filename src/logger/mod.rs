//! Logging capabilities and the leveled logger that implements them.
//!
//! Code that only needs to log should depend on these traits rather than on
//! [`LeveledLogger`], so tests can swap in a recording implementation.
//!
//! Every emission family has one required primitive per formatting variant,
//! taking an extra frame count for wrappers (`info_depth(1, ..)` inside a
//! helper reports the helper's caller). The plain forms are the same call with
//! a depth of zero, and the `*ln` forms append a newline. All of them are
//! `#[track_caller]`.
//!
//! Take loggers as generics (`L: Logger`), not `dyn Logger`: a call through a
//! trait object reports the trait method itself as the caller.

mod builder;
mod from_config;
mod leveled;

pub use builder::LeveledLoggerBuilder;
pub use leveled::{CALLER_BASE_DEPTH, FATAL_EXIT_CODE, LeveledLogger};

use crate::level::Level;
use std::fmt;

/// Level-less logging at the logger's default level.
pub trait PrintLogger {
    #[track_caller]
    fn print_depth(&self, depth: usize, message: &str);
    #[track_caller]
    fn printf_depth(&self, depth: usize, args: fmt::Arguments<'_>);
    #[track_caller]
    fn println_depth(&self, depth: usize, message: &str);

    #[track_caller]
    fn print(&self, message: &str) {
        self.print_depth(0, message);
    }

    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.printf_depth(0, args);
    }

    #[track_caller]
    fn println(&self, message: &str) {
        self.println_depth(0, message);
    }
}

pub trait DebugLogger {
    #[track_caller]
    fn debug_depth(&self, depth: usize, message: &str);
    #[track_caller]
    fn debugf_depth(&self, depth: usize, args: fmt::Arguments<'_>);

    #[track_caller]
    fn debug(&self, message: &str) {
        self.debug_depth(0, message);
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.debugf_depth(0, args);
    }

    /// Same as `debug` with a trailing newline appended.
    #[track_caller]
    fn debugln(&self, message: &str) {
        self.debugln_depth(0, message);
    }

    #[track_caller]
    fn debugln_depth(&self, depth: usize, message: &str) {
        self.debugf_depth(depth, format_args!("{message}\n"));
    }
}

pub trait InfoLogger {
    #[track_caller]
    fn info_depth(&self, depth: usize, message: &str);
    #[track_caller]
    fn infof_depth(&self, depth: usize, args: fmt::Arguments<'_>);

    #[track_caller]
    fn info(&self, message: &str) {
        self.info_depth(0, message);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.infof_depth(0, args);
    }

    /// Same as `info` with a trailing newline appended.
    #[track_caller]
    fn infoln(&self, message: &str) {
        self.infoln_depth(0, message);
    }

    #[track_caller]
    fn infoln_depth(&self, depth: usize, message: &str) {
        self.infof_depth(depth, format_args!("{message}\n"));
    }
}

pub trait WarnLogger {
    #[track_caller]
    fn warn_depth(&self, depth: usize, message: &str);
    #[track_caller]
    fn warnf_depth(&self, depth: usize, args: fmt::Arguments<'_>);

    #[track_caller]
    fn warn(&self, message: &str) {
        self.warn_depth(0, message);
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.warnf_depth(0, args);
    }

    /// Same as `warn` with a trailing newline appended.
    #[track_caller]
    fn warnln(&self, message: &str) {
        self.warnln_depth(0, message);
    }

    #[track_caller]
    fn warnln_depth(&self, depth: usize, message: &str) {
        self.warnf_depth(depth, format_args!("{message}\n"));
    }
}

pub trait ErrorLogger {
    #[track_caller]
    fn error_depth(&self, depth: usize, message: &str);
    #[track_caller]
    fn errorf_depth(&self, depth: usize, args: fmt::Arguments<'_>);

    #[track_caller]
    fn error(&self, message: &str) {
        self.error_depth(0, message);
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.errorf_depth(0, args);
    }

    /// Same as `error` with a trailing newline appended.
    #[track_caller]
    fn errorln(&self, message: &str) {
        self.errorln_depth(0, message);
    }

    #[track_caller]
    fn errorln_depth(&self, depth: usize, message: &str) {
        self.errorf_depth(depth, format_args!("{message}\n"));
    }
}

/// Fatal logging. Every method terminates the process with a nonzero status
/// after the (threshold-checked) line is written; none of them return.
pub trait FatalLogger {
    #[track_caller]
    fn fatal_depth(&self, depth: usize, message: &str) -> !;
    #[track_caller]
    fn fatalf_depth(&self, depth: usize, args: fmt::Arguments<'_>) -> !;

    #[track_caller]
    fn fatal(&self, message: &str) -> ! {
        self.fatal_depth(0, message)
    }

    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatalf_depth(0, args)
    }

    /// Same as `fatal` with a trailing newline appended.
    #[track_caller]
    fn fatalln(&self, message: &str) -> ! {
        self.fatalln_depth(0, message)
    }

    #[track_caller]
    fn fatalln_depth(&self, depth: usize, message: &str) -> ! {
        self.fatalf_depth(depth, format_args!("{message}\n"))
    }
}

/// Run-time level control. Safe to call from any thread while logging is in flight.
pub trait Leveler {
    /// Level used by the `print*` family.
    fn default_level(&self) -> Level;
    fn set_default_level(&self, level: Level);

    /// Minimum level that is written; lower levels are dropped.
    fn output_level(&self) -> Level;
    fn set_output_level(&self, level: Level);
}

/// Setup-time caller offset for loggers that are always called through wrappers.
///
/// Takes `&mut self`: the offset is not synchronized, so it can only be
/// changed while nothing else holds the logger.
pub trait CallerOffsetter {
    fn set_caller_offset(&mut self, offset: usize);
}

/// The full logging capability.
pub trait Logger:
    PrintLogger
    + DebugLogger
    + InfoLogger
    + WarnLogger
    + ErrorLogger
    + FatalLogger
    + Leveler
    + CallerOffsetter
{
}

impl<T> Logger for T where
    T: PrintLogger
        + DebugLogger
        + InfoLogger
        + WarnLogger
        + ErrorLogger
        + FatalLogger
        + Leveler
        + CallerOffsetter
{
}
