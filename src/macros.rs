// SPDX-License-Identifier: MIT OR Apache-2.0

//! `format!`-style shorthands over [`LogStream`](crate::LogStream).
//!
//! Each macro starts a stream at its level and, only if the stream is
//! enabled, appends the formatted message as a single field. Arguments of a
//! suppressed call are never evaluated.
//!
//! ```rust
//! let peer = "10.0.0.1";
//! linelog::info!("connection from {peer}");
//! linelog::warning!("retry {} of {}", 2, 5);
//! ```

/// Logs a formatted line at the given [`Level`](crate::Level).
///
/// ```rust
/// linelog::log!(linelog::Level::Error, "disk {} is {}% full", "/dev/sda1", 97);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {{
        let mut stream = $crate::LogStream::new($level);
        if stream.is_enabled() {
            stream.append(::std::format_args!($($arg)+));
        }
    }};
}

/// Logs a formatted [`Level::Debug`](crate::Level::Debug) line.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Logs a formatted [`Level::Info`](crate::Level::Info) line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Logs a formatted [`Level::Warning`](crate::Level::Warning) line.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $($arg)+)
    };
}

/// Logs a formatted [`Level::Error`](crate::Level::Error) line.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Logs a formatted [`Level::Fatal`](crate::Level::Fatal) line, then aborts.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {{
        $crate::log!($crate::Level::Fatal, $($arg)+);
        ::std::process::abort()
    }};
}

#[cfg(test)]
mod tests {
    use crate::config::tests::lock;
    use crate::{InMemoryHandler, Level, set_output_handler, set_severity_level};
    use std::cell::Cell;
    use std::sync::Arc;

    #[test]
    fn formats_one_field() {
        let _guard = lock();
        let handler = Arc::new(InMemoryHandler::new());
        set_output_handler(Some(handler.clone()));

        let user = "alice";
        crate::info!("login by {user} after {} tries", 3);
        crate::error!("plain");

        let lines = handler.drain_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::Info);
        assert!(lines[0].1.ends_with("] : login by alice after 3 tries"));
        assert_eq!(lines[1].0, Level::Error);
        assert!(lines[1].1.ends_with("] : plain"));
        set_output_handler(None);
    }

    #[test]
    fn suppressed_arguments_are_not_evaluated() {
        let _guard = lock();
        let handler = Arc::new(InMemoryHandler::new());
        set_output_handler(Some(handler.clone()));
        set_severity_level(Level::Error);

        let calls = Cell::new(0);
        let expensive = || {
            calls.set(calls.get() + 1);
            "value"
        };
        crate::debug!("{}", expensive());
        crate::warning!("{}", expensive());
        assert_eq!(calls.get(), 0);
        crate::log!(Level::Error, "{}", expensive());
        assert_eq!(calls.get(), 1);
        assert_eq!(handler.len(), 1);

        set_severity_level(Level::Debug);
        set_output_handler(None);
    }
}
