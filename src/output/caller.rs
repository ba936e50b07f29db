//! Resolves the source location reported for a log line.
//!
//! Entry points are `#[track_caller]`, so the call site arrives as a
//! [`Location`] for free. That call site is frame 1. Deeper frames (the callers
//! of logging wrappers) are found by walking the native stack, finding the
//! frame that matches the call site and stepping outward from it.
//!
//! The walk needs line tables in the binary. Cargo's default release profile
//! has none, so release builds that log with a depth or caller offset need
//! `debug = "line-tables-only"` (or more) in `[profile.release]`; without it
//! those lines report `???:0`.

use crate::internal;
use backtrace::Backtrace;
use std::borrow::Cow;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

static MISSING_DEBUG_INFO_REPORTED: AtomicBool = AtomicBool::new(false);

/// A resolved source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl Caller {
    #[must_use]
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Placeholder when the stack cannot be resolved (stripped binary, too deep).
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            file: Cow::Borrowed("???"),
            line: 0,
        }
    }

    #[must_use]
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Position `call_depth` frames out, counting the call site as frame 1.
///
/// Depths of 0 and 1 never touch the stack walker.
#[must_use]
pub fn resolve(origin: &'static Location<'static>, call_depth: usize) -> Caller {
    if call_depth <= 1 {
        return Caller::from_location(origin);
    }

    let frames = logical_frames();
    let Some(anchor) = frames
        .iter()
        .position(|frame| frame.as_ref().is_some_and(|(file, line)| matches(file, *line, origin)))
    else {
        report_missing_debug_info(origin);
        return Caller::unknown();
    };

    anchor
        .checked_add(call_depth - 1)
        .and_then(|index| frames.get(index))
        .and_then(Option::as_ref)
        .map_or_else(Caller::unknown, |(file, line)| {
            Caller::new(file.to_string_lossy().into_owned(), *line)
        })
}

/// Warns once per process that the call site is absent from the backtrace.
fn report_missing_debug_info(origin: &Location<'_>) {
    if !MISSING_DEBUG_INFO_REPORTED.swap(true, Ordering::Relaxed) {
        internal::warn(&format!(
            "Caller of {origin} not found in the stack trace, reporting ???:0; \
             build with debug = \"line-tables-only\" or more"
        ));
    }
}

/// One entry per function activation, innermost first. Inlined functions
/// appear as separate entries of the same native frame.
fn logical_frames() -> Vec<Option<(PathBuf, u32)>> {
    let trace = Backtrace::new();
    let mut frames = Vec::new();
    for frame in trace.frames() {
        let symbols = frame.symbols();
        if symbols.is_empty() {
            frames.push(None);
            continue;
        }
        for symbol in symbols {
            let position = symbol
                .filename()
                .zip(symbol.lineno())
                .map(|(file, line)| (file.to_path_buf(), line));
            frames.push(position);
        }
    }
    frames
}

/// Debug info carries absolute paths while `Location` is relative to the
/// crate root, so compare by path suffix.
fn matches(file: &Path, line: u32, origin: &Location<'_>) -> bool {
    line == origin.line() && file.ends_with(origin.file())
}
