//! Lock-free counter primitive shared by all monitors
//!
//! Monitors are updated from hot paths by arbitrary caller threads, so the
//! counter must never block and never lose an increment.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Monotonically increasing counter safe for arbitrary concurrent writers.
///
/// `add` is a lock-free atomic update: no lost increments, no blocking, no
/// panics. An addition that would overflow `u64` saturates at `u64::MAX` and
/// logs a warning; the counter stays saturated until the process restarts.
///
/// Reads are plain atomic loads. Each counter is independently consistent;
/// no snapshot consistency across different counters is promised.
#[derive(Debug, Default)]
pub struct SafeCounter(AtomicU64);

impl SafeCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Atomically add `delta`, saturating at `u64::MAX` on overflow.
    #[inline]
    pub fn add(&self, delta: u64) {
        let update = self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |value| {
                Some(value.saturating_add(delta))
            });
        // The closure always returns Some, so this never takes the Err arm.
        let previous = match update {
            Ok(value) | Err(value) => value,
        };
        if previous.checked_add(delta).is_none() {
            warn!(previous, delta, "counter overflow, saturating at u64::MAX");
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_add_and_get() {
        let counter = SafeCounter::new();
        assert_eq!(counter.get(), 0);
        counter.add(5);
        counter.add(7);
        assert_eq!(counter.get(), 12);
    }

    #[test]
    fn test_no_lost_updates_under_contention() {
        let counter = Arc::new(SafeCounter::new());
        let threads = 8;
        let adds_per_thread = 10_000;

        std::thread::scope(|scope| {
            for _ in 0..threads {
                let counter = Arc::clone(&counter);
                scope.spawn(move || {
                    for _ in 0..adds_per_thread {
                        counter.add(3);
                    }
                });
            }
        });

        assert_eq!(counter.get(), threads * adds_per_thread * 3);
    }

    #[test]
    fn test_overflow_saturates() {
        let counter = SafeCounter::new();
        counter.add(u64::MAX - 1);
        counter.add(10);
        assert_eq!(counter.get(), u64::MAX);

        // Saturated counters stay saturated.
        counter.add(1);
        assert_eq!(counter.get(), u64::MAX);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let counter = SafeCounter::new();
        counter.add(0);
        assert_eq!(counter.get(), 0);
    }
}
