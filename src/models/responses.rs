//! Response DTOs for the Pokédex API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::CacheStats;
use crate::fetcher::ListState;
use crate::models::{PokemonDetail, PokemonSummary};
use crate::view::{filter_by_name, letter_counts, suggestions, Pagination, MAX_SUGGESTIONS};

/// Response body for the list endpoint (GET /pokemon)
///
/// Everything the list panel renders: the filtered rows, autocomplete
/// suggestions, letter summary and pagination controls.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub page: u32,
    pub page_size: u32,
    /// Total across all pages, unaffected by the search filter
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
    /// Rows of the current page matching the search
    pub pokemons: Vec<PokemonSummary>,
    pub suggestions: Vec<String>,
    /// First letter to count, over the filtered rows
    pub letter_counts: BTreeMap<String, usize>,
    pub has_previous: bool,
    pub has_next: bool,
    /// Pages needed to show `total` entries
    pub page_count: u64,
}

impl ListResponse {
    /// Derives the list view from a fetch result and the search text.
    pub fn from_state(state: ListState, page: u32, page_size: u32, search: &str) -> Self {
        let filtered = filter_by_name(&state.pokemons, search);
        let counts = letter_counts(filtered.iter().copied());
        let pokemons: Vec<PokemonSummary> = filtered.into_iter().cloned().collect();
        let pagination = Pagination::new(page, page_size, state.total);

        Self {
            page,
            page_size,
            total: state.total,
            loading: state.loading,
            error: state.error,
            suggestions: suggestions(&state.pokemons, search, MAX_SUGGESTIONS),
            pokemons,
            letter_counts: counts,
            has_previous: pagination.has_previous(),
            has_next: pagination.has_next(),
            page_count: pagination.page_count(),
        }
    }
}

/// Response body for the detail endpoint (GET /pokemon/:name)
#[derive(Debug, Clone, Serialize)]
pub struct DetailResponse {
    pub name: String,
    pub weight: u32,
    /// Type names in slot order
    pub types: Vec<String>,
    /// Front sprite URL, if the Pokémon has one
    pub sprite: Option<String>,
}

impl From<PokemonDetail> for DetailResponse {
    fn from(detail: PokemonDetail) -> Self {
        Self {
            types: detail.type_names(),
            name: detail.name,
            weight: detail.weight,
            sprite: detail.sprites.front_default,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Pages currently cached
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// List requests that went to the remote API
    pub network_fetches: u64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, network_fetches: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            network_fetches,
        }
    }
}

/// Response body for clearing the cache (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} cached page(s)", removed),
            removed,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
