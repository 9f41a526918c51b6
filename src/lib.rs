//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# linelog

linelog is a small process-wide logger for long-running servers: one line
per call, a timestamped header, a severity threshold, and a log file that
can be rotated underneath running writers.

# The API

```rust
use linelog::{log_info, log_warning};

log_info().append("string").append("to").append("log").append(10);
log_info().nospace().append("string").append("to").append("log").append(10);
log_info().quote().append("string").append("to").append("log").append(10);
log_warning().append("disk").append(format_args!("{}%", 97)).append("full");
```

writes

```text
03.08.2017 12:44:15.737 I [26629] : string to log 10
03.08.2017 12:44:15.737 I [26629] : stringtolog10
03.08.2017 12:44:15.737 I [26629] : "string" "to" "log" "10"
03.08.2017 12:44:15.737 W [26629] : disk 97% full
```

A line is built by a [`LogStream`] and emitted when the stream is dropped,
normally at the end of the statement. `format!`-style [`info!`] and friends
are there too.

# Line format

```text
[<application prefix> ]DD.MM.YYYY HH:MM:SS.mmm <L> [<pid>] [<message prefix>]: <fields>
```

`<L>` is `D`, `I`, `W` or `E` (for both `Error` and `Fatal`). Time is local.

# Levels

`Debug < Info < Warning < Error < Fatal`. Calls below the threshold set with
[`set_severity_level`] cost one atomic load. A `Fatal` line aborts the
process once it has been written.

# Output

Lines go to stderr until [`set_log_file_name`] points them at a file, or
to an [`OutputHandler`] installed with [`set_output_handler`], which then
gets every line instead. [`rotate_file`] reopens the file, e.g. after
logrotate moved it; with the `signal` feature `rotate_on_signals` does that
on `SIGHUP`.

# Multithreading

Every function here may be called from any thread. Each thread keeps its
own pool of line buffers, so steady-state logging doesn't allocate.
*/

mod config;
mod destination;
mod dispatch;
mod handler;
mod header;
mod inmemory_handler;
mod level;
mod macros;
mod pool;
mod rotation;
#[cfg(all(unix, feature = "signal"))]
mod signal;
mod slot;
mod stream;

pub use config::{
    ShutdownGuard, log_enabled, set_application_prefix, set_message_prefix, set_output_handler,
    set_severity_level, set_severity_level_by_name, severity_level, shutdown, shutdown_guard,
};
pub use handler::OutputHandler;
pub use inmemory_handler::InMemoryHandler;
pub use level::{Level, ParseLevelError};
pub use pool::{PoolStats, pool_stats};
pub use rotation::{
    RotateError, current_log_file, log_file_name, rotate_file, set_log_file_name, try_rotate_file,
};
#[cfg(all(unix, feature = "signal"))]
pub use signal::{RotationWatcher, rotate_on_signals};
pub use stream::{LogStream, log_debug, log_error, log_fatal, log_info, log_warning};
