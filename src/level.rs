// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels.

use std::fmt::Display;
use std::str::FromStr;

/// Severity of a log line.
///
/// Levels are totally ordered, `Debug < Info < Warning < Error < Fatal`, and
/// filtering compares against that order: a line is emitted iff its level is
/// at or above the current threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Diagnostics for the people working on the program.
    #[default]
    Debug = 0,
    /// Normal operational messages.
    Info = 1,
    /// Suspicious condition, the program carries on.
    Warning = 2,
    /// Runtime error.
    Error = 3,
    /// Unrecoverable. The process aborts after the line is written.
    Fatal = 4,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    /// The single character used for this level in the line header.
    ///
    /// `Error` and `Fatal` share `E`.
    pub const fn as_char(self) -> char {
        match self {
            Level::Debug => 'D',
            Level::Info => 'I',
            Level::Warning => 'W',
            Level::Error | Level::Fatal => 'E',
        }
    }

    /// Lowercase name, as accepted by [`Level::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    pub(crate) const fn from_u8(raw: u8) -> Option<Level> {
        match raw {
            0 => Some(Level::Debug),
            1 => Some(Level::Info),
            2 => Some(Level::Warning),
            3 => Some(Level::Error),
            4 => Some(Level::Fatal),
            _ => None,
        }
    }

    /// Parses a level name, falling back to [`Level::Info`] for anything
    /// unrecognised.
    ///
    /// Only `debug`, `info`, `warning` and `error` are recognised here: the
    /// threshold can not be raised to `fatal` by name.
    ///
    /// ```
    /// use linelog::Level;
    /// assert_eq!(Level::from_name_or_info("warning"), Level::Warning);
    /// assert_eq!(Level::from_name_or_info("bogus"), Level::Info);
    /// ```
    pub fn from_name_or_info(name: &str) -> Level {
        match name {
            "debug" => Level::Debug,
            "warning" => Level::Warning,
            "error" => Level::Error,
            _ => Level::Info,
        }
    }
}

/// Returned by [`Level::from_str`] for an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity level '{name}'")]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Strict parse of a lowercase level name, including `fatal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| ParseLevelError { name: s.to_owned() })
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
