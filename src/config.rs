// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide logger configuration.
//!
//! One `Config` record lives for the whole process. It is created on first
//! use with the defaults below and is never torn down, only reset by
//! [`shutdown`].
//!
//! | Field            | Default  | Synchronisation                         |
//! |------------------|----------|-----------------------------------------|
//! | threshold        | `Debug`  | `AtomicU8`                              |
//! | output handler   | none     | `Slot` (whole-`Arc` swap)               |
//! | destination      | stderr   | `Slot` (whole-`Arc` swap)               |
//! | prefixes         | empty    | one `Mutex` for both strings            |
//! | rotation target  | none     | its own `Mutex`                         |
//!
//! The fields are independent on purpose: the hot path of a log call reads
//! the threshold with one atomic load, and only enabled calls touch the
//! prefix lock and the handles. A call racing a reconfiguration sees either
//! the old or the new value of each field, never a mix inside one field.
//!
//! # Examples
//!
//! ```
//! use linelog::{Level, log_debug, log_warning, set_severity_level};
//!
//! set_severity_level(Level::Warning);
//! log_debug().append("suppressed");
//! log_warning().append("emitted");
//! # set_severity_level(Level::Debug);
//! ```

use crate::Level;
use crate::destination::Destination;
use crate::handler::OutputHandler;
use crate::slot::Slot;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

#[derive(Debug, Default)]
pub(crate) struct Prefixes {
    /// Stored with its trailing separator space when non-empty.
    pub(crate) application: String,
    pub(crate) message: String,
}

pub(crate) struct Config {
    threshold: AtomicU8,
    handler: Slot<Option<Arc<dyn OutputHandler>>>,
    pub(crate) destination: Slot<Arc<Destination>>,
    prefixes: Mutex<Prefixes>,
    pub(crate) log_file_name: Mutex<Option<PathBuf>>,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    fn new() -> Self {
        Config {
            threshold: AtomicU8::new(Level::Debug as u8),
            handler: Slot::new(None),
            destination: Slot::new(Arc::new(Destination::Stderr)),
            prefixes: Mutex::new(Prefixes::default()),
            log_file_name: Mutex::new(None),
        }
    }

    pub(crate) fn global() -> &'static Config {
        CONFIG.get_or_init(Config::new)
    }

    pub(crate) fn threshold(&self) -> Level {
        // only ever stored from a Level
        Level::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or(Level::Debug)
    }

    pub(crate) fn handler(&self) -> Option<Arc<dyn OutputHandler>> {
        self.handler.load()
    }

    pub(crate) fn prefixes(&self) -> MutexGuard<'_, Prefixes> {
        self.prefixes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn log_file_name(&self) -> MutexGuard<'_, Option<PathBuf>> {
        self.log_file_name
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Sets the minimum level that is emitted. Lower levels are suppressed
/// before any formatting work.
pub fn set_severity_level(level: Level) {
    Config::global()
        .threshold
        .store(level as u8, Ordering::Relaxed);
}

/// Sets the threshold by name: `"debug"`, `"info"`, `"warning"` or `"error"`.
///
/// Any other name sets [`Level::Info`]. Use `name.parse::<Level>()` first if
/// an unknown name should be reported instead.
pub fn set_severity_level_by_name(name: &str) {
    set_severity_level(Level::from_name_or_info(name));
}

/// The current threshold.
pub fn severity_level() -> Level {
    Config::global().threshold()
}

/// Whether a line at `level` would currently be emitted.
pub fn log_enabled(level: Level) -> bool {
    level >= severity_level()
}

/// Installs `handler` as the receiver of every accepted line, or removes
/// the current one with `None`.
///
/// While a handler is installed the destination file is bypassed entirely.
pub fn set_output_handler(handler: Option<Arc<dyn OutputHandler>>) {
    // dropped outside the slot lock
    let _previous = Config::global().handler.swap(handler);
}

/// Sets the application prefix that starts every header.
///
/// An empty string removes it.
pub fn set_application_prefix(prefix: impl Into<String>) {
    let mut prefix = prefix.into();
    if !prefix.is_empty() {
        prefix.push(' ');
    }
    Config::global().prefixes().application = prefix;
}

/// Sets the message prefix printed right before the `": "` that ends every
/// header. Handy as a grep key. An empty string removes it.
pub fn set_message_prefix(prefix: impl Into<String>) {
    Config::global().prefixes().message = prefix.into();
}

/**
Puts the logger back in its start-up state as far as output goes: stderr
becomes the destination again, the rotation target is forgotten, and the
previous log file is closed once no writer holds it.

Threshold, prefixes and output handler are left alone.
*/
pub fn shutdown() {
    let config = Config::global();
    *config.log_file_name() = None;
    let previous = config.destination.swap(Arc::new(Destination::Stderr));
    drop(previous);
}

/// Calls [`shutdown`] when dropped.
///
/// Hold one in `main` so the log file is closed on the way out:
///
/// ```no_run
/// fn main() {
///     let _logging = linelog::shutdown_guard();
///     linelog::set_log_file_name("/var/log/app.log");
///     linelog::log_info().append("started");
/// }
/// ```
#[derive(Debug)]
#[must_use = "dropping the guard immediately restores stderr as the destination"]
pub struct ShutdownGuard {
    _private: (),
}

/// Returns a [`ShutdownGuard`].
pub fn shutdown_guard() -> ShutdownGuard {
    ShutdownGuard { _private: () }
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        shutdown();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Serialises tests in this crate that touch the global configuration.
    pub(crate) static TEST_CONFIG_GUARD: Mutex<()> = Mutex::new(());

    pub(crate) fn lock() -> MutexGuard<'static, ()> {
        TEST_CONFIG_GUARD
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn threshold_round_trip() {
        let _guard = lock();
        set_severity_level(Level::Error);
        assert_eq!(severity_level(), Level::Error);
        assert!(!log_enabled(Level::Warning));
        assert!(log_enabled(Level::Error));
        assert!(log_enabled(Level::Fatal));
        set_severity_level(Level::Debug);
    }

    #[test]
    fn unknown_name_falls_back_to_info() {
        let _guard = lock();
        set_severity_level(Level::Error);
        set_severity_level_by_name("bogus");
        assert_eq!(severity_level(), Level::Info);
        set_severity_level_by_name("warning");
        assert_eq!(severity_level(), Level::Warning);
        set_severity_level(Level::Debug);
    }

    #[test]
    fn application_prefix_gets_separator() {
        let _guard = lock();
        set_application_prefix("APP");
        assert_eq!(Config::global().prefixes().application, "APP ");
        set_application_prefix("");
        assert_eq!(Config::global().prefixes().application, "");
    }

    #[test]
    fn message_prefix_is_verbatim() {
        let _guard = lock();
        set_message_prefix("MSG");
        assert_eq!(Config::global().prefixes().message, "MSG");
        set_message_prefix(String::new());
        assert_eq!(Config::global().prefixes().message, "");
    }
}
