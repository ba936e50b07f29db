//! Where composed lines end up.
//!
//! A [`Sink`] receives whole lines, one `write_line` call per log entry, so a
//! line is never split between concurrent writers. Five line writers of one
//! logger share the same sink.

mod caller;
mod file;
mod line_writer;
mod memory;
mod terminal;

pub use caller::{Caller, resolve as resolve_caller};
pub use file::FileSink;
pub use line_writer::LineWriter;
pub use memory::MemorySink;
pub use terminal::{ColorDetector, ColorMode, NoColor, platform_detector};
#[cfg(unix)]
pub use terminal::TtyDetector;

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// The process standard streams, the only sinks that can be terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdStream {
    Stdout,
    Stderr,
}

/// Destination for fully composed log lines.
pub trait Sink: Send + Sync {
    /// Writes one complete line (including its newline) as a single write.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;

    /// Pushes buffered data to the destination.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    /// Which standard stream backs this sink, if any. Used for terminal detection.
    fn stream(&self) -> Option<StdStream> {
        None
    }
}

/// Process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line)?;
        out.flush()
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn stream(&self) -> Option<StdStream> {
        Some(StdStream::Stdout)
    }
}

/// Process standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }

    fn stream(&self) -> Option<StdStream> {
        Some(StdStream::Stderr)
    }
}

/// Any `Write` behind a mutex; the lock is held for the whole line.
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Gives the writer back, e.g. to inspect a `Vec<u8>` after logging.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        // A panic mid-write leaves at worst a partial line; keep logging.
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}
