//! Stepwise construction for loggers that need more than sink + flags.

use super::{CallerOffsetter, Leveler, LeveledLogger};
use crate::fmt::Flags;
use crate::level::Level;
use crate::output::{ColorDetector, ColorMode, Sink, StdoutSink, platform_detector};
use std::sync::Arc;

/// Builder for [`LeveledLogger`]. Defaults match [`LeveledLogger::new`] over stdout
/// with [`Flags::STD`].
pub struct LeveledLoggerBuilder {
    sink: Option<Arc<dyn Sink>>,
    flags: Flags,
    color: ColorMode,
    detector: Option<Box<dyn ColorDetector>>,
    default_level: Level,
    output_level: Level,
    caller_offset: usize,
}

impl Default for LeveledLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LeveledLoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: None,
            flags: Flags::STD,
            color: ColorMode::Auto,
            detector: None,
            default_level: Level::Info,
            output_level: Level::NotSet,
            caller_offset: 0,
        }
    }

    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Shares an existing sink, e.g. one that another logger also writes to.
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub const fn color(mut self, mode: ColorMode) -> Self {
        self.color = mode;
        self
    }

    /// Replaces the platform detector consulted by [`ColorMode::Auto`].
    #[must_use]
    pub fn detector(mut self, detector: impl ColorDetector + 'static) -> Self {
        self.detector = Some(Box::new(detector));
        self
    }

    #[must_use]
    pub const fn default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    #[must_use]
    pub const fn output_level(mut self, level: Level) -> Self {
        self.output_level = level;
        self
    }

    #[must_use]
    pub const fn caller_offset(mut self, offset: usize) -> Self {
        self.caller_offset = offset;
        self
    }

    #[must_use]
    pub fn build(self) -> LeveledLogger {
        let sink = self.sink.unwrap_or_else(|| Arc::new(StdoutSink));
        let detector = self.detector.as_deref().unwrap_or_else(|| platform_detector());
        let colored = self.color.resolve(sink.as_ref(), detector);

        let mut logger = LeveledLogger::with_color(sink, self.flags, colored);
        logger.set_default_level(self.default_level);
        logger.set_output_level(self.output_level);
        logger.set_caller_offset(self.caller_offset);
        logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{InfoLogger, WarnLogger};
    use crate::output::MemorySink;

    struct AlwaysTty;

    impl ColorDetector for AlwaysTty {
        fn supports_color(&self, _sink: &dyn Sink) -> bool {
            true
        }
    }

    #[test]
    fn applies_levels_and_offset() {
        let sink = MemorySink::new();
        let logger = LeveledLogger::builder()
            .sink(sink.clone())
            .flags(Flags::NONE)
            .default_level(Level::Debug)
            .output_level(Level::Warn)
            .caller_offset(3)
            .build();

        assert_eq!(logger.default_level(), Level::Debug);
        assert_eq!(logger.output_level(), Level::Warn);
        assert_eq!(logger.caller_depth(), 4);

        logger.info("dropped");
        logger.warn("kept");
        assert_eq!(sink.contents(), "W kept\n");
    }

    #[test]
    fn auto_color_consults_detector() {
        let sink = MemorySink::new();
        let logger = LeveledLogger::builder()
            .sink(sink.clone())
            .flags(Flags::NONE)
            .detector(AlwaysTty)
            .build();
        logger.info("c");
        assert_eq!(sink.contents(), "\x1b[0;32mI \x1b[0;mc\n");
    }
}
