// SPDX-License-Identifier: MIT OR Apache-2.0
//! The byte sink accepted lines are written to when no output handler is set.

use crate::rotation::RotateError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/**
Where lines go: the process's stderr, or a file opened for appending.

A file destination is closed when the last `Arc` to it is dropped, which is
after rotation has displaced it *and* every writer that loaded it before the
swap has finished its line.
*/
#[derive(Debug)]
pub(crate) enum Destination {
    Stderr,
    File { path: PathBuf, file: Mutex<File> },
}

impl Destination {
    pub(crate) fn open_append(path: &Path) -> Result<Self, RotateError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| RotateError::Open {
                path: path.to_owned(),
                source,
            })?;
        Ok(Destination::File {
            path: path.to_owned(),
            file: Mutex::new(file),
        })
    }

    pub(crate) fn is_default(&self) -> bool {
        matches!(self, Destination::Stderr)
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            Destination::Stderr => None,
            Destination::File { path, .. } => Some(path),
        }
    }

    /// Writes a newline-terminated line and flushes. Write errors are dropped.
    ///
    /// The whole line goes out in one `write_all` under the destination's
    /// lock. Right after a rotation the old and the new handle may both be
    /// appending to the same file, so the newline must not be a separate
    /// write.
    pub(crate) fn write_line(&self, terminated: &str) {
        debug_assert!(terminated.ends_with('\n'));
        match self {
            Destination::Stderr => {
                let _ = write_flushed(&mut std::io::stderr().lock(), terminated);
            }
            Destination::File { file, .. } => {
                let mut file = file.lock().unwrap_or_else(PoisonError::into_inner);
                let _ = write_flushed(&mut *file, terminated);
            }
        }
    }
}

fn write_flushed<W: Write>(w: &mut W, text: &str) -> std::io::Result<()> {
    w.write_all(text.as_bytes())?;
    w.flush()
}
