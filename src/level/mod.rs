//! Severity levels that gate which messages reach the sink.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Ordered severity of a log line.
///
/// The discriminants are the filtering mechanism itself (`level >= threshold`),
/// and they are stored raw inside atomics, so they must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i32)]
pub enum Level {
    /// Lowest level; as a threshold it means "emit everything".
    #[default]
    NotSet = 0,
    /// Development diagnostics.
    Debug = 1,
    /// Normal operational messages.
    Info = 2,
    /// Anomalies that do not stop the program.
    Warn = 3,
    /// Failed operations.
    Error = 4,
    /// Unrecoverable failures; logging at this level terminates the process.
    Fatal = 5,
}

impl Level {
    /// The five levels that own a line writer, lowest first.
    pub const ALL: [Self; 5] = [Self::Debug, Self::Info, Self::Warn, Self::Error, Self::Fatal];

    /// Parses level text. Never fails: anything unrecognized is `NotSet`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace; the
    /// single-letter codes `D I W E F N` are accepted as well.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "DEBUG" | "D" => Self::Debug,
            "INFO" | "I" => Self::Info,
            "WARN" | "WARNING" | "W" => Self::Warn,
            "ERROR" | "E" => Self::Error,
            "FATAL" | "FATA" | "F" => Self::Fatal,
            _ => Self::NotSet,
        }
    }

    /// Canonical uppercase mnemonic.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotSet => "NOT SET",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Inverse of [`Level::as_i32`]; out-of-range values map to `NotSet`.
    #[must_use]
    pub const fn from_i32(raw: i32) -> Self {
        match raw {
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            4 => Self::Error,
            5 => Self::Fatal,
            _ => Self::NotSet,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_i32(level.as_i32()), level);
        }
        assert_eq!(Level::from_i32(0), Level::NotSet);
    }

    #[test]
    fn out_of_range_raw_is_not_set() {
        assert_eq!(Level::from_i32(-3), Level::NotSet);
        assert_eq!(Level::from_i32(42), Level::NotSet);
    }
}
