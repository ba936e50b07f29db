//! Composes one complete log line: label, timestamp, caller and message.

use super::Flags;
use crate::output::Caller;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{self, Write};

/// Whether a line with these flags needs the caller's file and line.
#[must_use]
pub const fn wants_caller(flags: Flags) -> bool {
    flags.contains(Flags::SHORT_FILE) || flags.contains(Flags::LONG_FILE)
}

const fn wants_time(flags: Flags) -> bool {
    flags.contains(Flags::DATE) || flags.contains(Flags::TIME) || flags.contains(Flags::MICROSECONDS)
}

/// Renders the full line, always terminated by exactly one trailing newline
/// unless the message already ends with one.
///
/// Layout: `[label][date ][time ][file:line: ][label with MSG_PREFIX]message\n`.
#[must_use]
pub fn format_line(
    label: &str,
    flags: Flags,
    caller: Option<&Caller>,
    message: fmt::Arguments<'_>,
) -> String {
    let mut line = String::with_capacity(64 + label.len());

    if !flags.contains(Flags::MSG_PREFIX) {
        line.push_str(label);
    }
    if wants_time(flags) {
        if flags.contains(Flags::UTC) {
            write_time(&mut line, Utc::now(), flags);
        } else {
            write_time(&mut line, Local::now(), flags);
        }
    }
    if let Some(caller) = caller {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(&caller.file)
        } else {
            &*caller.file
        };
        let _ = write!(line, "{file}:{}: ", caller.line);
    }
    if flags.contains(Flags::MSG_PREFIX) {
        line.push_str(label);
    }

    // Only a failing user Display impl can make this error; keep what was written.
    let _ = line.write_fmt(message);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

fn write_time<Tz: TimeZone>(line: &mut String, now: DateTime<Tz>, flags: Flags)
where
    Tz::Offset: fmt::Display,
{
    if flags.contains(Flags::DATE) {
        let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
    }
    if flags.contains(Flags::TIME) || flags.contains(Flags::MICROSECONDS) {
        let _ = write!(line, "{}", now.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(line, "{}", now.format("%.6f"));
        }
        line.push(' ');
    }
}

/// Last path element, accepting both separators.
fn short_file(file: &str) -> &str {
    file.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(file)
}
