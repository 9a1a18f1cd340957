//! Bounded least-used cache
//!
//! Memoizes per-string artifacts (n-gram sets, norms) for the n-gram based
//! algorithms. The cache holds at most `capacity` entries; when it is full the
//! entry with the smallest use count is evicted before a new one is stored.
//! Among entries sharing the smallest use count the oldest inserted one goes.
//!
//! A cache is plain owned state with no internal locking. It belongs to a
//! single algorithm instance; callers sharing one across threads must
//! synchronize externally (see [`crate::SharedFinder`]).

use ahash::AHashMap;
use std::fmt;
use tracing::trace;

/// Default number of entries held by an algorithm's cache
pub const DEFAULT_CACHE_SIZE: usize = 3;

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    use_count: u64,
    /// Insertion sequence, breaks ties between equally used entries
    seq: u64,
}

/// Fixed-capacity cache of values keyed by string
#[derive(Debug, Clone)]
pub struct Cache<T> {
    entries: AHashMap<String, CacheEntry<T>>,
    capacity: usize,
    next_seq: u64,
}

impl<T> Cache<T> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero gives a cache that never stores anything.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: AHashMap::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key`, counting the hit towards the entry's use count.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let entry = self.entries.get_mut(key)?;
        entry.use_count = entry.use_count.saturating_add(1);
        Some(&entry.value)
    }

    /// Look up `key` without touching its use count.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&T> {
        self.entries.get(key).map(|e| &e.value)
    }

    /// Store `value` under `key` with a use count of one.
    ///
    /// If the cache is full the least used entry is evicted first, even when
    /// `key` is already present.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        if self.capacity == 0 {
            return;
        }
        self.evict_least_used();

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                use_count: 1,
                seq,
            },
        );
    }

    /// Remove every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict_least_used(&mut self) {
        if self.entries.len() < self.capacity {
            return;
        }

        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, e)| (e.use_count, e.seq))
            .map(|(k, _)| k.clone());

        if let Some(key) = victim {
            trace!(key = %key, "cache_evict");
            self.entries.remove(&key);
        }
    }
}

impl<T> fmt::Display for Cache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cache sz: {:3}", self.capacity)
    }
}
