//! Append-only log file sink.

use super::Sink;
use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// A log file opened in append mode. Each line is one `write_all` under the lock.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Opens (creating if needed) `path` for appending. A leading `~` is
    /// expanded and missing parent directories are created.
    ///
    /// # Errors
    /// Returns the I/O error from creating the directories or opening the file.
    pub fn open(path: impl AsRef<str>) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(path.as_ref());
        let path = PathBuf::from(expanded.as_ref());

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        internal::info(&format!("Log file opened: {}", path.display()));
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_parents_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/app.log");
        let path_str = path.to_string_lossy().into_owned();

        let sink = FileSink::open(&path_str).unwrap();
        sink.write_line(b"I first\n").unwrap();
        drop(sink);

        let sink = FileSink::open(&path_str).unwrap();
        sink.write_line(b"I second\n").unwrap();
        sink.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "I first\nI second\n");
    }
}
