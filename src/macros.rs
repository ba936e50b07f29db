//! `format!`-style shorthands for the `*f` methods.
//!
//! ```
//! use lvlog::{Flags, LeveledLogger, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let logger = LeveledLogger::with_color(Arc::new(sink.clone()), Flags::NONE, false);
//! let user = "ada";
//! lvlog::infof!(logger, "hello {user}, {} unread", 3);
//! assert_eq!(sink.contents(), "I hello ada, 3 unread\n");
//! ```
//!
//! The first argument is anything that derefs to a logger: a `LeveledLogger`,
//! a reference, an `Arc`, or a generic `L: Logger`.

/// Logs at the logger's default level with `format!` arguments.
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::logger::PrintLogger as _;
        ($logger).printf(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::logger::DebugLogger as _;
        ($logger).debugf(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::logger::InfoLogger as _;
        ($logger).infof(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::logger::WarnLogger as _;
        ($logger).warnf(::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::logger::ErrorLogger as _;
        ($logger).errorf(::std::format_args!($($arg)+))
    }};
}

/// Logs at FATAL and exits the process with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::logger::FatalLogger as _;
        ($logger).fatalf(::std::format_args!($($arg)+))
    }};
}
