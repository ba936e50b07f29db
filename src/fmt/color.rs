//! ANSI colors for the per-level labels.
//!
//! The labels only need the basic 8-color SGR set, which every color-capable
//! terminal renders the same way.

use crate::level::Level;
use std::fmt;

/// Basic foreground colors used to decorate level labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
}

impl Color {
    /// Returns terminal styling to the default.
    pub const RESET: &'static str = "\x1b[0;m";

    /// The raw escape sequence that switches the foreground to this color.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[0;31m",
            Self::Green => "\x1b[0;32m",
            Self::Yellow => "\x1b[0;33m",
            Self::Blue => "\x1b[0;34m",
            Self::Magenta => "\x1b[0;35m",
        }
    }

    /// Label color for a level: blue, green, yellow, magenta, red from DEBUG up.
    #[must_use]
    pub const fn for_level(level: Level) -> Option<Self> {
        match level {
            Level::NotSet => None,
            Level::Debug => Some(Self::Blue),
            Level::Info => Some(Self::Green),
            Level::Warn => Some(Self::Yellow),
            Level::Error => Some(Self::Magenta),
            Level::Fatal => Some(Self::Red),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wraps `text` in the color's escape sequence and a reset.
#[must_use]
pub fn paint(text: &str, color: Color) -> String {
    format!("{color}{text}{}", Color::RESET)
}

/// [`paint`] when `colored`, otherwise `text` unchanged.
#[must_use]
pub fn try_paint(text: &str, color: Color, colored: bool) -> String {
    if colored {
        paint(text, color)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_emitting_level_has_a_distinct_color() {
        let colors: Vec<Color> = Level::ALL
            .iter()
            .filter_map(|l| Color::for_level(*l))
            .collect();
        assert_eq!(colors.len(), 5);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
