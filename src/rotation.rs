// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log file selection and rotation.
//!
//! Rotation (re)opens the configured file for appending and swaps it in as
//! the destination. The order is open, swap, then close: the new handle is
//! live before the old one is released, and the old one is only closed once
//! every writer that loaded it before the swap has finished its line. No
//! writer ever sees a closed destination.
//!
//! The usual external rotation dance works as expected:
//!
//! ```no_run
//! linelog::set_log_file_name("/var/log/app.log");
//! // logrotate renames app.log to app.log.1, then tells us
//! linelog::rotate_file();
//! // new lines go to a fresh /var/log/app.log
//! ```

use crate::config::Config;
use crate::destination::Destination;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Rotation failed. The previous destination is still in use.
#[derive(Debug, thiserror::Error)]
pub enum RotateError {
    #[error("cannot open log file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Sets the file lines are appended to, and rotates to it right away.
///
/// An empty path clears the target; the current destination stays as it is.
/// Failure to open the file is reported on stderr and otherwise ignored.
pub fn set_log_file_name(path: impl AsRef<Path>) {
    let path = path.as_ref();
    *Config::global().log_file_name() = (!path.as_os_str().is_empty()).then(|| path.to_owned());
    rotate_file();
}

/// The current rotation target, if any.
pub fn log_file_name() -> Option<PathBuf> {
    Config::global().log_file_name().clone()
}

/// Reopens the configured log file.
///
/// Does nothing when no file is configured. If the file can't be opened,
/// says so once on stderr and keeps writing to the current destination.
pub fn rotate_file() {
    if let Err(err) = try_rotate_file() {
        let _ = writeln!(std::io::stderr().lock(), "{err}");
    }
}

/// Like [`rotate_file`], but reports failure to the caller instead of stderr.
pub fn try_rotate_file() -> Result<(), RotateError> {
    let config = Config::global();
    let Some(path) = config.log_file_name().clone() else {
        return Ok(());
    };

    let opened = Arc::new(Destination::open_append(&path)?);
    let previous = config.destination.swap(opened);
    // Closes a file destination once the last in-flight writer lets go.
    drop(previous);
    Ok(())
}

/// The file currently written to, or `None` for stderr.
pub fn current_log_file() -> Option<PathBuf> {
    let destination = Config::global().destination.load();
    if destination.is_default() {
        None
    } else {
        destination.path().map(Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::lock;
    use crate::{log_info, shutdown};

    #[test]
    fn unset_target_is_a_no_op() {
        let _guard = lock();
        shutdown();
        assert_eq!(log_file_name(), None);
        try_rotate_file().unwrap();
        assert_eq!(current_log_file(), None);
    }

    #[test]
    fn setting_a_name_switches_destination() {
        let _guard = lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        set_log_file_name(&path);
        assert_eq!(log_file_name().as_deref(), Some(path.as_path()));
        assert_eq!(current_log_file().as_deref(), Some(path.as_path()));
        log_info().append("into the file");
        shutdown();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with(": into the file\n"), "{contents}");
        assert_eq!(current_log_file(), None);
    }

    #[test]
    fn failed_open_keeps_current_destination() {
        let _guard = lock();
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.log");
        let bad = dir.path().join("no-such-dir").join("bad.log");

        set_log_file_name(&good);
        set_log_file_name(&bad);
        assert_eq!(current_log_file().as_deref(), Some(good.as_path()));
        assert!(matches!(try_rotate_file(), Err(RotateError::Open { .. })));

        log_info().append("still here");
        shutdown();
        assert!(
            std::fs::read_to_string(&good)
                .unwrap()
                .contains("still here")
        );
    }

    #[test]
    fn empty_name_clears_target_but_keeps_file() {
        let _guard = lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        set_log_file_name(&path);
        set_log_file_name("");
        assert_eq!(log_file_name(), None);
        assert_eq!(current_log_file().as_deref(), Some(path.as_path()));
        shutdown();
    }

    #[test]
    fn error_message_names_path_and_cause() {
        let err = Destination::open_append(Path::new("/nonexistent-dir/x.log")).unwrap_err();
        let message = err.to_string();
        assert!(
            message.starts_with("cannot open log file '/nonexistent-dir/x.log': "),
            "{message}"
        );
    }
}
