//! TTL-bounded memoization of raw release sets.
//!
//! Wraps the fetch boundary, not the ranking/filtering: filters and sorts are
//! always recomputed on the cached raw set, since they can change without
//! re-fetching. Process-local, unbounded, TTL-only; a latency optimization,
//! not a storage system.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::types::{ContentType, RawReleaseSet};

/// Injectable time source so tests can drive TTL expiry deterministically.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock backed [`Clock`], the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced [`Clock`] for tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    /// Creates a manual clock starting at the current instant.
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

/// Identity of one cached fetch: which provider looked up which book through
/// which source, scoped to a content type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub provider: String,
    pub book_id: String,
    pub source: String,
    pub content_type: ContentType,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: RawReleaseSet,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) >= self.ttl
    }
}

/// Cache hit/miss counters for monitoring.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from cache.
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// TTL-bounded cache of raw release sets keyed by
/// (provider, book, source, content type).
///
/// `get`/`set`/`invalidate` for the same key are linearizable: a single lock
/// guards the map, so concurrent callers never observe a lost update.
#[derive(Debug)]
pub struct ResultCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    /// Creates a cache with the given default TTL and the system clock.
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, Arc::new(SystemClock))
    }

    /// Creates a cache with an injected clock.
    pub fn with_clock(default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached payload for `key`, or `None` on a miss.
    ///
    /// Expiry is lazy: a stale entry is removed here, at read time. The TTL
    /// honored is the one the payload declared at `set` time, else the
    /// default.
    pub fn get(&self, key: &CacheKey) -> Option<RawReleaseSet> {
        let mut entries = self.entries.lock();

        if let Some(entry) = entries.get(key) {
            if !entry.is_expired(self.clock.now()) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(source = %key.source, book_id = %key.book_id, "release cache hit");
                return Some(entry.payload.clone());
            }
            entries.remove(key);
            debug!(source = %key.source, book_id = %key.book_id, "removed stale release cache entry");
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Stores `payload` under `key`, replacing any previous entry whole and
    /// resetting its stored-at instant.
    ///
    /// The payload's own `ttl_seconds`, when declared, overrides the default
    /// freshness window.
    pub fn set(&self, key: CacheKey, payload: RawReleaseSet) {
        let ttl = payload
            .ttl_seconds
            .map(Duration::from_secs)
            .unwrap_or(self.default_ttl);

        let entry = CacheEntry {
            payload,
            stored_at: self.clock.now(),
            ttl,
        };

        debug!(source = %key.source, book_id = %key.book_id, ?ttl, "cached release set");
        self.entries.lock().insert(key, entry);
    }

    /// Drops the entry for `key`, if any (e.g. when server-side search
    /// parameters change).
    pub fn invalidate(&self, key: &CacheKey) {
        if self.entries.lock().remove(key).is_some() {
            debug!(source = %key.source, book_id = %key.book_id, "invalidated release cache entry");
        }
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&self) {
        self.entries.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.entries.lock().len(),
        }
    }
}
