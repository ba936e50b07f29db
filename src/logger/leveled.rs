use super::{
    CallerOffsetter, DebugLogger, ErrorLogger, FatalLogger, InfoLogger, Leveler, LeveledLoggerBuilder,
    PrintLogger, WarnLogger,
};
use crate::fmt::{Color, Flags, try_paint};
use crate::internal;
use crate::level::Level;
use crate::output::{LineWriter, Sink, StdoutSink, platform_detector};
use std::fmt;
use std::io;
use std::panic::Location;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};

/// Frames between a public entry point and the user's call site. Entry points
/// are `#[track_caller]`, so the captured location already is the call site.
pub const CALLER_BASE_DEPTH: usize = 1;

/// Exit status of the process after a fatal log call.
pub const FATAL_EXIT_CODE: i32 = 1;

/// A logger with five severities, a run-time threshold and caller reporting.
///
/// Each level owns a [`LineWriter`] with its own label (`"D "`, `"I "`, `"W "`,
/// `"E "`, `"F "`), all writing to the same sink.
///
/// The default and output levels are atomics and may be changed from any
/// thread at any time. The caller offset is plain data, changed through
/// `&mut self` before the logger is shared.
pub struct LeveledLogger {
    debug: LineWriter,
    info: LineWriter,
    warn: LineWriter,
    error: LineWriter,
    fatal: LineWriter,
    default_level: AtomicI32,
    output_level: AtomicI32,
    depth: usize,
    write_failures: AtomicU64,
}

impl LeveledLogger {
    /// Logger over `sink`; labels are colored when the sink is a color terminal.
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>, flags: Flags) -> Self {
        let colored = platform_detector().supports_color(sink.as_ref());
        Self::with_color(sink, flags, colored)
    }

    /// Like [`LeveledLogger::new`] with colored labels forced on or off.
    #[must_use]
    pub fn with_color(sink: Arc<dyn Sink>, flags: Flags, colored: bool) -> Self {
        let writer = |level: Level, label: &str| {
            let label = Color::for_level(level)
                .map_or_else(|| label.to_string(), |color| try_paint(label, color, colored));
            LineWriter::new(Arc::clone(&sink), label, flags)
        };

        Self {
            debug: writer(Level::Debug, "D "),
            info: writer(Level::Info, "I "),
            warn: writer(Level::Warn, "W "),
            error: writer(Level::Error, "E "),
            fatal: writer(Level::Fatal, "F "),
            default_level: AtomicI32::new(Level::Info.as_i32()),
            output_level: AtomicI32::new(Level::NotSet.as_i32()),
            depth: CALLER_BASE_DEPTH,
            write_failures: AtomicU64::new(0),
        }
    }

    /// Standard output, date, time and short file name.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink), Flags::STD | Flags::SHORT_FILE)
    }

    #[must_use]
    pub fn builder() -> LeveledLoggerBuilder {
        LeveledLoggerBuilder::new()
    }

    /// Frames walked from the call site, i.e. caller offset plus [`CALLER_BASE_DEPTH`].
    #[must_use]
    pub const fn caller_depth(&self) -> usize {
        self.depth
    }

    /// Whether a message at `level` would currently be written.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.output_level()
    }

    /// The line writer for `level`; `NotSet` has none.
    #[must_use]
    pub const fn writer(&self, level: Level) -> Option<&LineWriter> {
        match level {
            Level::NotSet => None,
            Level::Debug => Some(&self.debug),
            Level::Info => Some(&self.info),
            Level::Warn => Some(&self.warn),
            Level::Error => Some(&self.error),
            Level::Fatal => Some(&self.fatal),
        }
    }

    /// Lines the sink refused since construction. Logging calls never surface
    /// these errors themselves.
    #[must_use]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// # Errors
    /// Whatever the sink returns.
    pub fn flush(&self) -> io::Result<()> {
        self.info.flush()
    }

    /// The single emission policy behind every public method: one atomic load
    /// and one comparison decide; suppressed calls never format anything.
    fn emit(
        &self,
        level: Level,
        depth: usize,
        origin: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        if level < self.output_level() {
            return;
        }
        let Some(writer) = self.writer(level) else {
            return;
        };
        if let Err(e) = writer.output(self.depth.saturating_add(depth), origin, args) {
            self.record_failure(&e);
        }
    }

    /// Print family: threshold is the default level, label is the default
    /// level's label (INFO's when the default is NOT SET).
    fn emit_default(
        &self,
        depth: usize,
        origin: &'static Location<'static>,
        args: fmt::Arguments<'_>,
    ) {
        let level = self.default_level();
        if level < self.output_level() {
            return;
        }
        let writer = self.writer(level).unwrap_or(&self.info);
        if let Err(e) = writer.output(self.depth.saturating_add(depth), origin, args) {
            self.record_failure(&e);
        }
    }

    fn record_failure(&self, error: &io::Error) {
        if self.write_failures.fetch_add(1, Ordering::Relaxed) == 0 {
            internal::warn(&format!("Log sink failed: {error}"));
        }
    }

    fn terminate(&self) -> ! {
        if let Err(e) = self.fatal.flush() {
            self.record_failure(&e);
        }
        process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for LeveledLogger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for LeveledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledLogger")
            .field("default_level", &self.default_level())
            .field("output_level", &self.output_level())
            .field("depth", &self.depth)
            .field("flags", &self.info.flags())
            .finish_non_exhaustive()
    }
}

// Levels are independent words with no data published alongside them, so
// relaxed ordering is enough to rule out torn or stale-forever reads.
impl Leveler for LeveledLogger {
    fn default_level(&self) -> Level {
        Level::from_i32(self.default_level.load(Ordering::Relaxed))
    }

    fn set_default_level(&self, level: Level) {
        self.default_level.store(level.as_i32(), Ordering::Relaxed);
    }

    fn output_level(&self) -> Level {
        Level::from_i32(self.output_level.load(Ordering::Relaxed))
    }

    fn set_output_level(&self, level: Level) {
        self.output_level.store(level.as_i32(), Ordering::Relaxed);
    }
}

impl CallerOffsetter for LeveledLogger {
    fn set_caller_offset(&mut self, offset: usize) {
        self.depth = offset.saturating_add(CALLER_BASE_DEPTH);
    }
}

impl PrintLogger for LeveledLogger {
    #[track_caller]
    fn print_depth(&self, depth: usize, message: &str) {
        self.emit_default(depth, Location::caller(), format_args!("{message}"));
    }

    #[track_caller]
    fn printf_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.emit_default(depth, Location::caller(), args);
    }

    #[track_caller]
    fn println_depth(&self, depth: usize, message: &str) {
        self.emit_default(depth, Location::caller(), format_args!("{message}\n"));
    }
}

impl DebugLogger for LeveledLogger {
    #[track_caller]
    fn debug_depth(&self, depth: usize, message: &str) {
        self.emit(Level::Debug, depth, Location::caller(), format_args!("{message}"));
    }

    #[track_caller]
    fn debugf_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, depth, Location::caller(), args);
    }
}

impl InfoLogger for LeveledLogger {
    #[track_caller]
    fn info_depth(&self, depth: usize, message: &str) {
        self.emit(Level::Info, depth, Location::caller(), format_args!("{message}"));
    }

    #[track_caller]
    fn infof_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, depth, Location::caller(), args);
    }
}

impl WarnLogger for LeveledLogger {
    #[track_caller]
    fn warn_depth(&self, depth: usize, message: &str) {
        self.emit(Level::Warn, depth, Location::caller(), format_args!("{message}"));
    }

    #[track_caller]
    fn warnf_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.emit(Level::Warn, depth, Location::caller(), args);
    }
}

impl ErrorLogger for LeveledLogger {
    #[track_caller]
    fn error_depth(&self, depth: usize, message: &str) {
        self.emit(Level::Error, depth, Location::caller(), format_args!("{message}"));
    }

    #[track_caller]
    fn errorf_depth(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, depth, Location::caller(), args);
    }
}

impl FatalLogger for LeveledLogger {
    #[track_caller]
    fn fatal_depth(&self, depth: usize, message: &str) -> ! {
        self.emit(Level::Fatal, depth, Location::caller(), format_args!("{message}"));
        self.terminate()
    }

    #[track_caller]
    fn fatalf_depth(&self, depth: usize, args: fmt::Arguments<'_>) -> ! {
        self.emit(Level::Fatal, depth, Location::caller(), args);
        self.terminate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;

    fn logger(flags: Flags) -> (LeveledLogger, MemorySink) {
        let sink = MemorySink::new();
        (LeveledLogger::with_color(Arc::new(sink.clone()), flags, false), sink)
    }

    #[test]
    fn starts_at_info_default_and_unfiltered() {
        let (l, _) = logger(Flags::NONE);
        assert_eq!(l.default_level(), Level::Info);
        assert_eq!(l.output_level(), Level::NotSet);
        assert_eq!(l.caller_depth(), CALLER_BASE_DEPTH);
    }

    #[test]
    fn labels_are_plain_without_color() {
        let (l, _) = logger(Flags::NONE);
        let labels: Vec<&str> = Level::ALL
            .iter()
            .map(|lv| l.writer(*lv).unwrap().label())
            .collect();
        assert_eq!(labels, ["D ", "I ", "W ", "E ", "F "]);
        assert!(l.writer(Level::NotSet).is_none());
    }

    #[test]
    fn colored_labels_wrap_in_escapes() {
        let l = LeveledLogger::with_color(Arc::new(MemorySink::new()), Flags::NONE, true);
        assert_eq!(l.writer(Level::Debug).unwrap().label(), "\x1b[0;34mD \x1b[0;m");
        assert_eq!(l.writer(Level::Fatal).unwrap().label(), "\x1b[0;31mF \x1b[0;m");
    }

    #[test]
    fn is_enabled_follows_output_level() {
        let (l, _) = logger(Flags::NONE);
        assert!(l.is_enabled(Level::Debug));
        l.set_output_level(Level::Warn);
        assert!(!l.is_enabled(Level::Info));
        assert!(l.is_enabled(Level::Warn));
        assert!(l.is_enabled(Level::Error));
    }

    #[test]
    fn huge_depth_saturates() {
        let (mut l, sink) = logger(Flags::SHORT_FILE);
        l.set_caller_offset(usize::MAX);
        l.info_depth(usize::MAX, "huge");
        assert_eq!(sink.contents(), "I ???:0: huge\n");
    }

    #[test]
    fn caller_offset_is_additive() {
        let (mut l, _) = logger(Flags::NONE);
        l.set_caller_offset(2);
        assert_eq!(l.caller_depth(), CALLER_BASE_DEPTH + 2);
        l.set_caller_offset(0);
        assert_eq!(l.caller_depth(), CALLER_BASE_DEPTH);
    }

    #[test]
    fn print_uses_default_level_label() {
        let (l, sink) = logger(Flags::NONE);
        l.set_default_level(Level::Warn);
        l.print("p");
        l.set_default_level(Level::NotSet);
        l.print("q");
        assert_eq!(sink.contents(), "W p\nI q\n");
    }

    #[test]
    fn print_is_filtered_by_default_level() {
        let (l, sink) = logger(Flags::NONE);
        l.set_output_level(Level::Warn);
        l.print("hidden");
        l.set_default_level(Level::Error);
        l.print("shown");
        assert_eq!(sink.contents(), "E shown\n");
    }

    #[test]
    fn println_does_not_double_newline() {
        let (l, sink) = logger(Flags::NONE);
        l.println("one");
        assert_eq!(sink.contents(), "I one\n");
    }

    #[test]
    fn error_is_its_own_tier() {
        let (l, sink) = logger(Flags::NONE);
        l.set_output_level(Level::Error);
        l.warn("w");
        l.error("e");
        assert_eq!(sink.contents(), "E e\n");
    }

    struct BrokenSink;

    impl Sink for BrokenSink {
        fn write_line(&self, _line: &[u8]) -> io::Result<()> {
            Err(io::Error::other("disk gone"))
        }
    }

    #[test]
    fn write_failures_are_counted_not_raised() {
        let l = LeveledLogger::with_color(Arc::new(BrokenSink), Flags::NONE, false);
        l.info("a");
        l.warn("b");
        l.set_output_level(Level::Error);
        l.warn("suppressed, never written");
        assert_eq!(l.write_failures(), 2);
    }
}
