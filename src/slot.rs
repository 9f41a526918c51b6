// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
A cell holding a cheaply clonable value (an `Arc`, or an `Option` of one)
that can be replaced wholesale while other threads read it.

Readers take a shared spin lock just long enough to clone the value, writers
take it exclusively just long enough to exchange it. Readers therefore always
see either the complete old value or the complete new one, and a value that
has been swapped out stays alive for as long as some reader still holds its
clone.
*/

use std::cell::UnsafeCell;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

const FREE: u32 = 0;
// any other value below WRITER is a reader count
const WRITER: u32 = u32::MAX;

pub(crate) struct Slot<V> {
    value: UnsafeCell<V>,
    state: AtomicU32,
}

// SAFETY: every access to `value` happens under `state`, shared for reads
// and exclusive for writes.
unsafe impl<V: Send> Send for Slot<V> {}
unsafe impl<V: Send + Sync> Sync for Slot<V> {}

impl<V: Clone> Slot<V> {
    pub(crate) const fn new(value: V) -> Self {
        Slot {
            value: UnsafeCell::new(value),
            state: AtomicU32::new(FREE),
        }
    }

    /// Clones the current value.
    pub(crate) fn load(&self) -> V {
        while self
            .state
            .fetch_update(Acquire, Relaxed, |readers| {
                (readers < WRITER - 1).then_some(readers + 1)
            })
            .is_err()
        {
            std::hint::spin_loop();
        }
        // SAFETY: shared lock held, writers are excluded
        let value = unsafe { (*self.value.get()).clone() };
        self.state.fetch_sub(1, Release);
        value
    }

    /// Installs `value` and hands back the one it displaced.
    ///
    /// The displaced value is dropped by the caller, outside the lock.
    pub(crate) fn swap(&self, value: V) -> V {
        while self
            .state
            .compare_exchange_weak(FREE, WRITER, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        // SAFETY: exclusive lock held
        let previous = unsafe { std::mem::replace(&mut *self.value.get(), value) };
        self.state.store(FREE, Release);
        previous
    }
}

impl<V: Clone + std::fmt::Debug> std::fmt::Debug for Slot<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Slot").field(&self.load()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn swap_returns_previous() {
        let slot = Slot::new(Arc::new(1));
        let old = slot.swap(Arc::new(2));
        assert_eq!(*old, 1);
        assert_eq!(*slot.load(), 2);
    }

    #[test]
    fn readers_keep_displaced_value_alive() {
        let slot = Slot::new(Arc::new(String::from("old")));
        let held = slot.load();
        drop(slot.swap(Arc::new(String::from("new"))));
        assert_eq!(held.as_str(), "old");
        assert_eq!(Arc::strong_count(&held), 1);
    }

    #[test]
    fn concurrent_readers_never_see_torn_values() {
        let slot = Arc::new(Slot::new(Arc::new((0u64, 0u64))));
        let writer = {
            let slot = slot.clone();
            std::thread::spawn(move || {
                for i in 1..=1000u64 {
                    slot.swap(Arc::new((i, i * 2)));
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let slot = slot.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        let pair = slot.load();
                        assert_eq!(pair.1, pair.0 * 2);
                    }
                })
            })
            .collect();
        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(*slot.load(), (1000, 2000));
    }
}
