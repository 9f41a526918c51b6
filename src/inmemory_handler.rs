// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Handler
//!
//! An [`OutputHandler`] that keeps every line it receives in memory. Useful
//! for tests that need to look at what was logged, and for programs that
//! want to collect their log lines and ship them somewhere themselves.

use crate::Level;
use crate::handler::OutputHandler;
use std::sync::{Mutex, PoisonError};

/// Stores every line it is handed, together with its level.
///
/// # Example
///
/// ```rust
/// use linelog::{InMemoryHandler, log_info, set_output_handler};
/// use std::sync::Arc;
///
/// let handler = Arc::new(InMemoryHandler::new());
/// set_output_handler(Some(handler.clone()));
///
/// log_info().append("Test message").append(42);
///
/// let logs = handler.drain_logs();
/// assert!(logs.ends_with("Test message 42"));
/// # set_output_handler(None);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryHandler {
    lines: Mutex<Vec<(Level, String)>>,
}

// Clone is not implemented: two handlers sharing one history would need an
// Arc anyway, and callers already hold this one behind an Arc.

impl InMemoryHandler {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Takes every stored line, joined with newlines, and empties the store.
    pub fn drain_logs(&self) -> String {
        self.drain_lines()
            .into_iter()
            .map(|(_, line)| line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Takes every stored line with its level, and empties the store.
    pub fn drain_lines(&self) -> Vec<(Level, String)> {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *lines)
    }

    /// Number of lines currently stored.
    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputHandler for InMemoryHandler {
    fn write_line(&self, level: Level, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, line.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_store() {
        let handler = InMemoryHandler::new();
        handler.write_line(Level::Info, "first");
        handler.write_line(Level::Error, "second");
        assert_eq!(handler.len(), 2);

        assert_eq!(handler.drain_logs(), "first\nsecond");
        assert!(handler.is_empty());
        assert_eq!(handler.drain_logs(), "");
    }

    #[test]
    fn keeps_levels() {
        let handler = InMemoryHandler::new();
        handler.write_line(Level::Warning, "careful");
        assert_eq!(
            handler.drain_lines(),
            vec![(Level::Warning, "careful".to_string())]
        );
    }
}
