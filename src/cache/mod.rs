//! Cache Module
//!
//! Provides the list page cache with TTL freshness, LRU eviction and a
//! persisted slot for the most recently fetched page.

mod clock;
mod entry;
mod lru;
mod stats;
mod storage;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, PageKey};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use storage::{FileStorage, MemoryStorage, SlotStorage};
pub use store::{PageCache, SlotWrite};

// == Public Constants ==
/// Name of the persisted slot holding the most recently fetched page
pub const CACHE_SLOT: &str = "pokemon_list_cache";

/// Default freshness window for cached pages
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;
