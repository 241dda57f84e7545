//! Cache port for memoizing lookups against slow collaborators.
//!
//! Callers own their cache instance and pass it where it is needed; there is
//! no process-wide cache.

use std::time::Instant;

/// Key/value cache that may forget entries at any time.
pub trait Cache<K, V> {
    /// Fetch a live entry, if one exists.
    fn get(&self, key: &K) -> Option<V>;

    /// Store or replace an entry.
    fn set(&self, key: K, value: V);
}

/// Time source for expiring entries.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time via [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
