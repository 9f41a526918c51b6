// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rotating the log file from a signal, typically `SIGHUP` after logrotate
//! has moved the old file away.
//!
//! ```no_run
//! use signal_hook::consts::SIGHUP;
//!
//! linelog::set_log_file_name("/var/log/app.log");
//! let watcher = linelog::rotate_on_signals(&[SIGHUP]).expect("install SIGHUP handler");
//! // ... run ...
//! watcher.close();
//! ```

use crate::rotation::rotate_file;
use signal_hook::iterator::{Handle, Signals};
use std::thread::JoinHandle;

/// Background thread calling [`rotate_file`] on every delivered signal.
///
/// Stops when closed or dropped.
pub struct RotationWatcher {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

/// Starts a [`RotationWatcher`] for `signals`.
///
/// Fails if a handler can't be registered, e.g. for `SIGKILL`.
pub fn rotate_on_signals(signals: &[i32]) -> std::io::Result<RotationWatcher> {
    let mut signals = Signals::new(signals)?;
    let handle = signals.handle();
    let thread = std::thread::Builder::new()
        .name("linelog-rotate".into())
        .spawn(move || {
            for _ in signals.forever() {
                rotate_file();
            }
        })?;
    Ok(RotationWatcher {
        handle,
        thread: Some(thread),
    })
}

impl RotationWatcher {
    /// Unregisters the signals and waits for the thread to exit.
    pub fn close(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl std::fmt::Debug for RotationWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationWatcher")
            .field("running", &self.thread.is_some())
            .finish()
    }
}

impl Drop for RotationWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
