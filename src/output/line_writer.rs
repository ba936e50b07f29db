//! Per-level line writer: one label, one set of header flags, one shared sink.

use super::{Sink, caller};
use crate::fmt::{Flags, header};
use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

/// Composes and emits lines that all carry the same (possibly colored) label.
#[derive(Clone)]
pub struct LineWriter {
    sink: Arc<dyn Sink>,
    label: String,
    flags: Flags,
}

impl LineWriter {
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>, label: impl Into<String>, flags: Flags) -> Self {
        Self {
            sink,
            label: label.into(),
            flags,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Writes one line.
    ///
    /// `call_depth` counts frames outward from `origin`, the call site captured
    /// by the public entry point: 1 reports `origin` itself, 2 its caller, and
    /// so on. The stack is only consulted when the flags print a file name.
    ///
    /// # Errors
    /// Whatever the sink returns.
    pub fn output(
        &self,
        call_depth: usize,
        origin: &'static Location<'static>,
        message: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let caller =
            header::wants_caller(self.flags).then(|| caller::resolve(origin, call_depth));
        let line = header::format_line(&self.label, self.flags, caller.as_ref(), message);
        self.sink.write_line(line.as_bytes())
    }

    /// # Errors
    /// Whatever the sink returns.
    pub fn flush(&self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("label", &self.label)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
