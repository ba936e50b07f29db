//! Decides whether a sink should receive ANSI-colored labels.
//!
//! Detection is a strategy object picked per target platform at build time.
//! On unix the standard streams are probed for a terminal device; everywhere
//! else color is never auto-enabled, though it can still be forced.

use super::Sink;
#[cfg(unix)]
use super::StdStream;
use std::fmt;
use std::str::FromStr;

/// Answers "is this sink an interactive, color-capable destination?".
pub trait ColorDetector: Send + Sync {
    fn supports_color(&self, sink: &dyn Sink) -> bool;
}

/// Probes the terminal attributes of stdout/stderr. Other sinks are never terminals.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct TtyDetector;

#[cfg(unix)]
impl ColorDetector for TtyDetector {
    fn supports_color(&self, sink: &dyn Sink) -> bool {
        use is_terminal::IsTerminal;

        match sink.stream() {
            Some(StdStream::Stdout) => std::io::stdout().is_terminal(),
            Some(StdStream::Stderr) => std::io::stderr().is_terminal(),
            None => false,
        }
    }
}

/// Never reports color support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColor;

impl ColorDetector for NoColor {
    fn supports_color(&self, _sink: &dyn Sink) -> bool {
        false
    }
}

/// The detector for the platform this crate was built for.
#[must_use]
pub fn platform_detector() -> &'static dyn ColorDetector {
    #[cfg(unix)]
    {
        &TtyDetector
    }
    #[cfg(not(unix))]
    {
        &NoColor
    }
}

/// User-facing color choice from config and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Ask the platform detector.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the choice against a concrete sink.
    #[must_use]
    pub fn resolve(self, sink: &dyn Sink, detector: &dyn ColorDetector) -> bool {
        match self {
            Self::Auto => detector.supports_color(sink),
            Self::Always => true,
            Self::Never => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permissive like level parsing: anything unknown means `Auto`.
impl FromStr for ColorMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "always" | "on" | "true" | "yes" => Self::Always,
            "never" | "off" | "false" | "no" => Self::Never,
            _ => Self::Auto,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;

    struct Yes;

    impl ColorDetector for Yes {
        fn supports_color(&self, _sink: &dyn Sink) -> bool {
            true
        }
    }

    #[test]
    fn memory_sink_is_never_a_terminal() {
        assert!(!platform_detector().supports_color(&MemorySink::new()));
    }

    #[test]
    fn explicit_modes_ignore_detector() {
        let sink = MemorySink::new();
        assert!(ColorMode::Always.resolve(&sink, &NoColor));
        assert!(!ColorMode::Never.resolve(&sink, &Yes));
        assert!(ColorMode::Auto.resolve(&sink, &Yes));
        assert!(!ColorMode::Auto.resolve(&sink, &NoColor));
    }

    #[test]
    fn mode_parsing_is_permissive() {
        assert_eq!("ALWAYS".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!(" never ".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert_eq!("sometimes".parse::<ColorMode>(), Ok(ColorMode::Auto));
    }
}
