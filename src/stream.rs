// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-call line builder.
//!
//! # Lifecycle
//!
//! 1. [`LogStream::new`] reads the threshold. Below it, the stream is created
//!    disabled: no buffer, no header, and every later call is a no-op.
//! 2. Otherwise a buffer comes out of the thread's [pool](crate::pool_stats),
//!    and the header is written into it.
//! 3. Fields are appended with [`LogStream::append`], separated and quoted
//!    according to the flags in effect when each one is appended.
//! 4. Dropping the stream dispatches the line and returns the buffer to the
//!    pool of the dropping thread.
//!
//! A stream owns its buffer outright. Keeping a line open across scopes is
//! done by moving the stream; [`LogStream::take`] moves the line out of a
//! borrowed stream. Exactly one drop flushes a given line.

use crate::Level;
use crate::config::Config;
use crate::dispatch::dispatch;
use crate::header::write_header;
use crate::pool::{self, Buffer};
use std::fmt::{Display, Write};

/**
Builds one log line and emits it when dropped.

```
use linelog::{Level, LogStream};

LogStream::new(Level::Info).append("string").append("to").append("log").append(10);
// 03.08.2017 12:44:15.737 I [26629] : string to log 10
LogStream::new(Level::Info).nospace().append("string").append("to").append(10);
// 03.08.2017 12:44:15.737 I [26629] : stringto10
LogStream::new(Level::Info).quote().append("string").append(10);
// 03.08.2017 12:44:15.737 I [26629] : "string" "10"
```
*/
#[derive(Debug)]
#[must_use = "the line is emitted when the stream is dropped"]
pub struct LogStream {
    buffer: Option<Buffer>,
}

impl LogStream {
    /// Starts a line at `level`.
    ///
    /// If `level` is below the current threshold, the returned stream is
    /// disabled and costs nothing further.
    pub fn new(level: Level) -> Self {
        let config = Config::global();
        if level < config.threshold() {
            return Self::disabled();
        }

        let mut buffer = pool::acquire();
        buffer.reset(level);

        let now = chrono::Local::now();
        let pid = std::process::id();
        {
            let prefixes = config.prefixes();
            write_header(&mut buffer.text, level, &now, pid, &prefixes);
        }

        LogStream {
            buffer: Some(buffer),
        }
    }

    /// A stream that discards everything.
    pub const fn disabled() -> Self {
        LogStream { buffer: None }
    }

    /// Whether this stream will emit a line.
    pub fn is_enabled(&self) -> bool {
        self.buffer.is_some()
    }

    /// The level of the line, or `None` for a disabled stream.
    pub fn level(&self) -> Option<Level> {
        self.buffer.as_ref().map(|buffer| buffer.level)
    }

    /// Separate following fields with a space. This is the default.
    pub fn space(&mut self) -> &mut Self {
        if let Some(buffer) = &mut self.buffer {
            buffer.space = true;
        }
        self
    }

    /// Don't separate following fields.
    pub fn nospace(&mut self) -> &mut Self {
        if let Some(buffer) = &mut self.buffer {
            buffer.space = false;
        }
        self
    }

    /// Wrap each following field in double quotes.
    pub fn quote(&mut self) -> &mut Self {
        if let Some(buffer) = &mut self.buffer {
            buffer.quote = true;
        }
        self
    }

    /// Stop quoting fields. This is the default.
    pub fn noquote(&mut self) -> &mut Self {
        if let Some(buffer) = &mut self.buffer {
            buffer.quote = false;
        }
        self
    }

    /// Appends one field, rendered with its `Display` impl.
    ///
    /// Strings go in as they are; anything else is rendered straight into
    /// the line buffer. `format_args!` works too, for fields that need
    /// formatting of their own.
    pub fn append<T: Display>(&mut self, value: T) -> &mut Self {
        if let Some(buffer) = &mut self.buffer {
            if buffer.space && !buffer.at_start {
                buffer.text.push(' ');
            }
            buffer.at_start = false;
            if buffer.quote {
                buffer.text.push('"');
            }
            // writing into a String can't fail
            let _ = write!(buffer.text, "{value}");
            if buffer.quote {
                buffer.text.push('"');
            }
        }
        self
    }

    /// Moves the line out into a new stream, leaving this one disabled.
    ///
    /// Only the returned stream will emit the line.
    ///
    /// ```
    /// use linelog::{LogStream, log_info};
    ///
    /// fn start(stream: &mut LogStream) -> LogStream {
    ///     stream.append("phase one");
    ///     stream.take()
    /// }
    ///
    /// let mut first = log_info();
    /// let mut kept = start(&mut first);
    /// drop(first); // emits nothing
    /// kept.append("phase two"); // emitted when `kept` drops
    /// ```
    pub fn take(&mut self) -> LogStream {
        LogStream {
            buffer: self.buffer.take(),
        }
    }

    /// The line built so far, header included.
    pub fn as_str(&self) -> Option<&str> {
        self.buffer.as_ref().map(|buffer| buffer.text.as_str())
    }
}

impl Default for LogStream {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Drop for LogStream {
    fn drop(&mut self) {
        if let Some(mut buffer) = self.buffer.take() {
            buffer.text.push('\n');
            dispatch(buffer.level, &buffer.text);
            buffer.text.clear();
            pool::release(buffer);
        }
    }
}

/*
Boilerplate notes.

Clone: no. Two handles on one line would need a rule for which drop emits it;
`take` makes the transfer explicit instead.
PartialEq/Eq/Hash: the interesting state is a half-built line, comparing it
is not meaningful.
Default: a disabled stream.
Send: automatic. A stream dropped on another thread emits normally and its
buffer joins that thread's pool.
*/

/// Starts a [`Level::Debug`] line.
pub fn log_debug() -> LogStream {
    LogStream::new(Level::Debug)
}

/// Starts a [`Level::Info`] line.
pub fn log_info() -> LogStream {
    LogStream::new(Level::Info)
}

/// Starts a [`Level::Warning`] line.
pub fn log_warning() -> LogStream {
    LogStream::new(Level::Warning)
}

/// Starts a [`Level::Error`] line.
pub fn log_error() -> LogStream {
    LogStream::new(Level::Error)
}

/// Starts a [`Level::Fatal`] line. The process aborts once it is emitted.
pub fn log_fatal() -> LogStream {
    LogStream::new(Level::Fatal)
}
