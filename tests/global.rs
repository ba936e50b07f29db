//! The process-wide facade. One test only: the installed context is global to
//! this binary.

use lvlog::prelude::*;
use lvlog::{Error, Flags, Level, LeveledLogger, LogContext, MemorySink, global};
use std::sync::Arc;

#[inline(never)]
fn warn_from_helper(message: &str) {
    global::warn_depth(1, message);
}

#[test]
fn facade_routes_through_the_installed_context() {
    let sink = MemorySink::new();
    let logger = LeveledLogger::with_color(Arc::new(sink.clone()), Flags::SHORT_FILE, false);
    global::install(LogContext::new(logger)).unwrap();

    assert!(matches!(
        global::install(LogContext::stdout()),
        Err(Error::AlreadyInstalled)
    ));
    assert_eq!(global::output_level(), Level::NotSet);
    assert_eq!(global::default_level(), Level::Info);

    global::set_output_level(Level::Warn);
    global::info("hidden");
    let line = line!() + 1;
    global::warn("visible");
    assert_eq!(sink.drain(), format!("W global.rs:{line}: visible\n"));

    global::set_default_level(Level::Error);
    let line = line!() + 1;
    global::printf(format_args!("{}-{}", "a", 1));
    assert_eq!(sink.drain(), format!("E global.rs:{line}: a-1\n"));

    let line = line!() + 1;
    warn_from_helper("through a helper");
    assert_eq!(
        sink.drain(),
        format!("W global.rs:{line}: through a helper\n")
    );

    global::set_output_level(Level::Debug);
    global::debugf(format_args!("{}", 'd'));
    global::errorf(format_args!("{}", 'e'));
    let out = sink.drain();
    assert!(out.starts_with("D global.rs:"), "{out}");
    assert!(out.contains("\nE global.rs:"), "{out}");

    let line = line!() + 1;
    global::infoln("with newline");
    assert_eq!(sink.drain(), format!("I global.rs:{line}: with newline\n"));

    assert_eq!(global::context().logger().output_level(), Level::Debug);
}
