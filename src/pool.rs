// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-thread pool of line buffers.
//!
//! Every enabled [`LogStream`](crate::LogStream) needs a `String` to format
//! into. Rather than allocating one per call, each thread keeps a free list
//! of idle buffers: a stream pops one (or allocates if the list is empty)
//! and pushes it back once its line has been dispatched. The buffer keeps
//! its capacity, so a thread in steady state formats lines without touching
//! the allocator.
//!
//! The pool has no cap and never shrinks. It grows to the deepest number of
//! streams a thread has had open at once, which is bounded by call nesting.
//!
//! No locking is involved because nothing is shared: a buffer released on
//! another thread than the one it came from simply joins that thread's list.

use crate::Level;
use std::cell::{Cell, RefCell};

/// One in-flight line and the formatting state that goes with it.
#[derive(Debug)]
pub(crate) struct Buffer {
    pub(crate) text: String,
    pub(crate) level: Level,
    /// Separate the next field from the previous one with a space.
    pub(crate) space: bool,
    /// Wrap each field in double quotes.
    pub(crate) quote: bool,
    /// No field appended yet; the header already ends with a space.
    pub(crate) at_start: bool,
}

impl Buffer {
    fn new() -> Self {
        Buffer {
            text: String::new(),
            level: Level::Debug,
            space: true,
            quote: false,
            at_start: true,
        }
    }

    /// Clears the text (keeping its allocation) and resets the flags.
    pub(crate) fn reset(&mut self, level: Level) {
        self.text.clear();
        self.level = level;
        self.space = true;
        self.quote = false;
        self.at_start = true;
    }
}

thread_local! {
    static POOL: RefCell<Vec<Buffer>> = const { RefCell::new(Vec::new()) };
    static ALLOCATED: Cell<usize> = const { Cell::new(0) };
}

/// Pops an idle buffer, or allocates one. The buffer is not reset.
pub(crate) fn acquire() -> Buffer {
    let reused = POOL.try_with(|pool| pool.borrow_mut().pop()).ok().flatten();
    reused.unwrap_or_else(|| {
        let _ = ALLOCATED.try_with(|count| count.set(count.get() + 1));
        Buffer::new()
    })
}

/// Returns `buffer` to this thread's idle list.
///
/// During thread teardown the pool may already be gone; the buffer is then
/// simply dropped.
pub(crate) fn release(buffer: Buffer) {
    let _ = POOL.try_with(|pool| pool.borrow_mut().push(buffer));
}

/// Buffer counts for the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoolStats {
    /// Buffers currently sitting in the idle list.
    pub idle: usize,
    /// Buffers ever allocated by this thread.
    pub allocated: usize,
}

/// Returns the calling thread's [`PoolStats`].
///
/// ```
/// use linelog::{log_info, pool_stats, set_output_handler};
/// use std::sync::Arc;
///
/// set_output_handler(Some(Arc::new(|_: linelog::Level, _: &str| {})));
/// for i in 0..100 {
///     log_info().append(i);
/// }
/// // one buffer, reused a hundred times
/// assert_eq!(pool_stats().allocated, 1);
/// # set_output_handler(None);
/// ```
pub fn pool_stats() -> PoolStats {
    PoolStats {
        idle: POOL.try_with(|pool| pool.borrow().len()).unwrap_or(0),
        allocated: ALLOCATED.try_with(Cell::get).unwrap_or(0),
    }
}
