//! Cache Entry Module
//!
//! Defines a cached list page and the key it is stored under.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::PageResult;

// == Page Key ==
/// Identifies a list page by its number and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageKey {
    pub page: u32,
    pub limit: u32,
}

impl PageKey {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page={} limit={}", self.page, self.limit)
    }
}

// == Cache Entry ==
/// A fetched page together with when and for which key it was fetched.
///
/// Serialized as `{data, page, limit, timestamp}`, which is also the layout of
/// the persisted slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The page as returned by the remote API
    pub data: PageResult,
    pub page: u32,
    pub limit: u32,
    /// Fetch time (Unix milliseconds)
    pub timestamp: u64,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(key: PageKey, data: PageResult, timestamp: u64) -> Self {
        Self {
            data,
            page: key.page,
            limit: key.limit,
            timestamp,
        }
    }

    pub fn key(&self) -> PageKey {
        PageKey::new(self.page, self.limit)
    }

    // == Is Fresh ==
    /// True while less than `ttl` has elapsed since the fetch.
    ///
    /// At exactly `ttl` the entry is stale. A timestamp in the future counts
    /// as zero elapsed time.
    pub fn is_fresh(&self, now_ms: u64, ttl: Duration) -> bool {
        (now_ms.saturating_sub(self.timestamp) as u128) < ttl.as_millis()
    }

    // == Is Valid For ==
    /// True when this entry may answer a request for `key` at `now_ms`.
    pub fn is_valid_for(&self, key: PageKey, now_ms: u64, ttl: Duration) -> bool {
        self.key() == key && self.is_fresh(now_ms, ttl)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PokemonSummary;

    const TTL: Duration = Duration::from_secs(300);

    fn sample_entry(timestamp: u64) -> CacheEntry {
        let data = PageResult {
            results: vec![PokemonSummary::new(
                "bulbasaur",
                "https://pokeapi.co/api/v2/pokemon/1/",
            )],
            count: 1302,
        };
        CacheEntry::new(PageKey::new(1, 12), data, timestamp)
    }

    #[test]
    fn test_entry_fresh_within_ttl() {
        let entry = sample_entry(1_000);
        assert!(entry.is_fresh(1_000, TTL));
        assert!(entry.is_fresh(1_000 + 299_999, TTL));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = sample_entry(1_000);
        assert!(!entry.is_fresh(1_000 + 300_000, TTL), "Entry should be stale at boundary");
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let entry = sample_entry(10_000);
        assert!(entry.is_fresh(5_000, TTL));
    }

    #[test]
    fn test_valid_only_for_same_key() {
        let entry = sample_entry(0);
        assert!(entry.is_valid_for(PageKey::new(1, 12), 10, TTL));
        assert!(!entry.is_valid_for(PageKey::new(2, 12), 10, TTL));
        assert!(!entry.is_valid_for(PageKey::new(1, 20), 10, TTL));
    }

    #[test]
    fn test_persisted_layout() {
        let entry = sample_entry(1_700_000_000_000);
        let json: serde_json::Value = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["page"], 1);
        assert_eq!(json["limit"], 12);
        assert_eq!(json["timestamp"], 1_700_000_000_000u64);
        assert_eq!(json["data"]["count"], 1302);
        assert_eq!(json["data"]["results"][0]["name"], "bulbasaur");
    }
}
