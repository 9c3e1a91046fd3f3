//! Page Cache Module
//!
//! Keyed page cache combining HashMap storage with LRU tracking, TTL freshness
//! and a persisted slot holding the most recently fetched page.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{
    CacheEntry, CacheStats, Clock, LruTracker, MemoryStorage, PageKey, SlotStorage, SystemClock,
    CACHE_SLOT,
};
use crate::error::{PokedexError, Result};
use crate::models::PageResult;

// == Page Cache ==
/// Cached list pages keyed by (page, limit).
#[derive(Debug)]
pub struct PageCache {
    /// Pages by key
    entries: HashMap<PageKey, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker<PageKey>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of pages held in memory
    max_entries: usize,
    /// How long a page stays fresh
    ttl: Duration,
    clock: Arc<dyn Clock>,
    /// Where the most recent page is persisted
    storage: Arc<dyn SlotStorage>,
}

impl PageCache {
    // == Constructor ==
    /// Creates a PageCache on the system clock with in-memory slot storage.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of pages held at once
    /// * `ttl` - Freshness window for each page
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl,
            clock: Arc::new(SystemClock),
            storage: Arc::new(MemoryStorage::new()),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the slot storage.
    pub fn with_storage(mut self, storage: Arc<dyn SlotStorage>) -> Self {
        self.storage = storage;
        self
    }

    // == Get ==
    /// Returns the page for `key` if it is still fresh.
    ///
    /// Stale pages count as misses but stay in place until overwritten or
    /// purged by `cleanup_expired`.
    pub fn get(&mut self, key: PageKey) -> Option<PageResult> {
        let now = self.clock.now_ms();

        match self.entries.get(&key) {
            Some(entry) if entry.is_valid_for(key, now, self.ttl) => {
                let data = entry.data.clone();
                self.stats.record_hit();
                self.lru.touch(&key);
                debug!(%key, "page cache hit");
                Some(data)
            }
            Some(_) => {
                self.stats.record_miss();
                debug!(%key, "page cache stale");
                None
            }
            None => {
                self.stats.record_miss();
                debug!(%key, "page cache miss");
                None
            }
        }
    }

    // == Insert ==
    /// Stores a freshly fetched page, stamped with the current time.
    ///
    /// Overwrites any page under the same key. At capacity, the least recently
    /// used page is evicted first. The returned `SlotWrite` replaces the
    /// persisted slot with this page once saved; it holds no borrow of the
    /// cache, so callers can save it after releasing their lock.
    pub fn insert(&mut self, key: PageKey, data: PageResult) -> SlotWrite {
        let entry = CacheEntry::new(key, data, self.clock.now_ms());
        let write = SlotWrite {
            storage: self.storage.clone(),
            entry: entry.clone(),
        };

        self.put(entry);
        write
    }

    fn put(&mut self, entry: CacheEntry) {
        let key = entry.key();
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "evicted page");
            }
        }

        self.entries.insert(key, entry);
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Restore ==
    /// Loads the persisted slot back into memory.
    ///
    /// Returns the restored key, or None when the slot is empty or already
    /// stale. The entry keeps its original timestamp.
    pub fn restore(&mut self) -> Result<Option<PageKey>> {
        let Some(json) = self.storage.load(CACHE_SLOT)? else {
            return Ok(None);
        };

        let entry: CacheEntry = serde_json::from_str(&json).map_err(|err| {
            PokedexError::Storage(format!("slot '{}' is not a cache entry: {}", CACHE_SLOT, err))
        })?;

        if !entry.is_fresh(self.clock.now_ms(), self.ttl) {
            debug!(key = %entry.key(), "persisted page is stale, not restoring");
            return Ok(None);
        }

        let key = entry.key();
        self.put(entry);
        Ok(Some(key))
    }

    // == Clear ==
    /// Drops every page, including the persisted slot.
    ///
    /// Returns the number of in-memory pages removed.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.set_total_entries(0);
        self.storage.remove(CACHE_SLOT)?;
        Ok(count)
    }

    // == Cleanup Expired ==
    /// Removes all stale pages from memory.
    ///
    /// Returns the number of pages removed. The persisted slot is left alone,
    /// its freshness is checked when it is restored.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired: Vec<PageKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_fresh(now, self.ttl))
            .map(|(key, _)| *key)
            .collect();

        for key in &expired {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        self.stats.set_total_entries(self.entries.len());
        expired.len()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Slot Write ==
/// A pending write of the persisted slot.
#[derive(Debug)]
pub struct SlotWrite {
    storage: Arc<dyn SlotStorage>,
    entry: CacheEntry,
}

impl SlotWrite {
    pub fn key(&self) -> PageKey {
        self.entry.key()
    }

    /// Replaces the persisted slot with this entry. May block on disk I/O.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.entry)
            .map_err(|err| PokedexError::Storage(err.to_string()))?;
        self.storage.save(CACHE_SLOT, &json)
    }
}
