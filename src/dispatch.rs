// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hands finished lines to the output handler or the destination.
//!
//! # Flow
//!
//! 1. If an [`OutputHandler`](crate::OutputHandler) is installed, it gets the
//!    line and nothing else happens.
//! 2. Otherwise the line is written, newline-terminated, to the current
//!    destination and flushed.
//! 3. A [`Level::Fatal`] line aborts the process after either path, whether
//!    or not the write succeeded.

use crate::Level;
use crate::config::Config;

/// Delivers one finished line. `terminated` ends with its newline, which
/// handlers don't get to see.
pub(crate) fn dispatch(level: Level, terminated: &str) {
    let config = Config::global();
    let handler = config.handler();
    match &handler {
        Some(handler) => {
            let line = terminated.strip_suffix('\n').unwrap_or(terminated);
            handler.write_line(level, line)
        }
        None => config.destination.load().write_line(terminated),
    }

    if level == Level::Fatal {
        if let Some(handler) = &handler {
            handler.prepare_to_die();
        }
        std::process::abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::lock;
    use crate::{InMemoryHandler, set_output_handler};
    use std::sync::Arc;

    #[test]
    fn handler_receives_line_verbatim() {
        let _guard = lock();
        let handler = Arc::new(InMemoryHandler::new());
        set_output_handler(Some(handler.clone()));

        dispatch(Level::Warning, "exact text, no newline\n");

        assert_eq!(
            handler.drain_lines(),
            vec![(Level::Warning, "exact text, no newline".to_string())]
        );
        set_output_handler(None);
    }

    #[test]
    fn removed_handler_stops_receiving() {
        let _guard = lock();
        let handler = Arc::new(InMemoryHandler::new());
        set_output_handler(Some(handler.clone()));
        set_output_handler(None);

        dispatch(Level::Info, "to stderr\n");

        assert!(handler.is_empty());
    }
}
