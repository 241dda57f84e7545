//! Bounded in-memory cache with per-instance time-to-live.

use std::{
    hash::Hash,
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

use lru::LruCache;

use crate::{
    Error, Result,
    ports::{Cache, Clock, SystemClock},
};

struct Entry<V> {
    inserted_at: Instant,
    value: V,
}

/// In-memory cache holding at most `capacity` entries for at most `ttl`.
///
/// An entry is live while `now - inserted_at <= ttl`; expired entries are
/// dropped when read. Reads do not refresh recency, so inserting a new key
/// into a full cache evicts the oldest insertion.
///
/// Clones share the same storage.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tutor::{adapters::TtlCache, ports::Cache};
///
/// let cache = TtlCache::new(16, Duration::from_secs(600))?;
/// cache.set("points:47.6,-122.3".to_string(), 42);
/// assert_eq!(cache.get(&"points:47.6,-122.3".to_string()), Some(42));
/// # Ok::<(), tutor::Error>(())
/// ```
pub struct TtlCache<K, V> {
    entries: Arc<Mutex<LruCache<K, Entry<V>>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache using the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `capacity` is zero.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock))
    }

    /// Create a cache reading time from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `capacity` is zero.
    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| Error::InvalidConfiguration {
            message: "cache capacity must be at least 1".to_string(),
        })?;

        Ok(Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
            ttl,
            clock,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// Number of stored entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Entry<V>>> {
        // entries stay consistent even if a holder panicked
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<K, V> Cache<K, V> for TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.lock();

        let entry = entries.peek(key)?;
        if now.saturating_duration_since(entry.inserted_at) <= self.ttl {
            return Some(entry.value.clone());
        }

        tracing::trace!("cache entry expired");
        entries.pop(key);
        None
    }

    fn set(&self, key: K, value: V) {
        let inserted_at = self.clock.now();
        // put moves an existing key to the most recent end
        self.lock().put(key, Entry { inserted_at, value });
    }
}

impl<K, V> Clone for TtlCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            ttl: self.ttl,
            clock: Arc::clone(&self.clock),
        }
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize, ttl_secs: u64) -> (TtlCache<String, u32>, ManualClock) {
        let clock = ManualClock::new();
        let cache =
            TtlCache::with_clock(capacity, Duration::from_secs(ttl_secs), Arc::new(clock.clone()))
                .unwrap();
        (cache, clock)
    }

    #[test]
    fn entries_live_until_ttl_elapses() {
        let (cache, clock) = cache(4, 600);
        cache.set("forecast".into(), 1);

        clock.advance(Duration::from_secs(600));
        assert_eq!(cache.get(&"forecast".into()), Some(1));

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get(&"forecast".into()), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn set_refreshes_timestamp() {
        let (cache, clock) = cache(4, 120);
        cache.set("alerts:WA".into(), 1);
        clock.advance(Duration::from_secs(100));
        cache.set("alerts:WA".into(), 2);
        clock.advance(Duration::from_secs(100));
        assert_eq!(cache.get(&"alerts:WA".into()), Some(2));
    }

    #[test]
    fn full_cache_evicts_oldest_insertion() {
        let (cache, _clock) = cache(2, 600);
        cache.set("a".into(), 1);
        cache.set("b".into(), 2);
        cache.set("a".into(), 10);
        cache.set("c".into(), 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"b".into()), None);
        assert_eq!(cache.get(&"a".into()), Some(10));
        assert_eq!(cache.get(&"c".into()), Some(3));
    }

    #[test]
    fn reads_do_not_delay_eviction() {
        let (cache, _clock) = cache(2, 600);
        cache.set("a".into(), 1);
        cache.set("b".into(), 2);
        assert_eq!(cache.get(&"a".into()), Some(1));
        cache.set("c".into(), 3);

        assert_eq!(cache.get(&"a".into()), None);
        assert_eq!(cache.get(&"b".into()), Some(2));
        assert_eq!(cache.capacity(), 2);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = TtlCache::<String, u32>::new(0, Duration::from_secs(1));
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn clones_share_storage() {
        let (cache, _clock) = cache(4, 600);
        let other = cache.clone();
        other.set("k".into(), 7);
        assert_eq!(cache.get(&"k".into()), Some(7));
        cache.clear();
        assert!(other.is_empty());
    }
}
