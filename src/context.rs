//! Explicit logger wiring for applications.
//!
//! Components that log take a [`LogContext`] (or a `&L where L: Logger`
//! borrowed from one) instead of reaching for a global. The process-wide
//! facade in [`crate::global`] is just one installed context.
//!
//! The context is generic rather than holding a `dyn Logger`: caller tracking
//! does not survive calls through a trait object, which would report the trait
//! method itself as the caller.

use crate::logger::{LeveledLogger, Logger};
use std::fmt;
use std::sync::Arc;

/// Shared handle to the logger an application uses. Cheap to clone.
pub struct LogContext<L = LeveledLogger> {
    logger: Arc<L>,
}

impl<L: Logger> LogContext<L> {
    /// Wraps a fully configured logger. Set any caller offset before this:
    /// once shared, only the level setters remain available.
    #[must_use]
    pub fn new(logger: L) -> Self {
        Self {
            logger: Arc::new(logger),
        }
    }

    #[must_use]
    pub const fn from_arc(logger: Arc<L>) -> Self {
        Self { logger }
    }

    #[must_use]
    pub fn logger(&self) -> &L {
        &self.logger
    }

    #[must_use]
    pub fn shared(&self) -> Arc<L> {
        Arc::clone(&self.logger)
    }
}

impl LogContext {
    /// Standard output with date, time and short file name.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(LeveledLogger::stdout())
    }
}

impl<L> Clone for LogContext<L> {
    fn clone(&self) -> Self {
        Self {
            logger: Arc::clone(&self.logger),
        }
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<L: Logger> fmt::Debug for LogContext<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("default_level", &self.logger.default_level())
            .field("output_level", &self.logger.output_level())
            .finish_non_exhaustive()
    }
}
