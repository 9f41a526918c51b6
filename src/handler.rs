// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Level;

/**
Receives every accepted line in place of the default destination.

Install one with [`set_output_handler`](crate::set_output_handler). The handler
alone is responsible for getting the line where it needs to go; nothing is
written to the destination file while it is installed.

Handlers are called synchronously from whichever thread finished the line,
so they must be `Send + Sync`. They must not panic.

Any `Fn(Level, &str) + Send + Sync` closure is a handler:

```
use linelog::{Level, set_output_handler};
use std::sync::Arc;

set_output_handler(Some(Arc::new(|level: Level, line: &str| {
    println!("{level}: {line}");
})));
# set_output_handler(None);
```
*/
pub trait OutputHandler: Send + Sync {
    /// Handles one finished line. `line` has no trailing newline.
    fn write_line(&self, level: Level, line: &str);

    /**
    The process is about to abort because of a [`Level::Fatal`] line.
    Flush anything buffered.
    */
    fn prepare_to_die(&self) {}
}

impl<F> OutputHandler for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn write_line(&self, level: Level, line: &str) {
        self(level, line)
    }
}

/*
Boilerplate notes.

OutputHandler is a trait object in practice (Arc<dyn OutputHandler>), so no
Debug bound: closures can't provide one and requiring it would rule them out.
*/
