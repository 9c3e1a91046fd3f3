//! API Handlers
//!
//! HTTP request handlers for each Pokédex endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::{PageCache, SlotStorage};
use crate::client::PokemonSource;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::fetcher::ListFetcher;
use crate::models::{
    ClearResponse, DetailResponse, HealthResponse, ListQuery, ListResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<ListFetcher>,
    /// Page size used for fetching and for the pagination bounds
    pub page_size: u32,
}

impl AppState {
    pub fn new(fetcher: ListFetcher, page_size: u32) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            page_size,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the page cache on the given slot storage and wires it to `source`.
    pub fn from_config(
        config: &Config,
        source: Arc<dyn PokemonSource>,
        storage: Arc<dyn SlotStorage>,
    ) -> Self {
        let cache = PageCache::new(config.max_cached_pages, config.ttl()).with_storage(storage);
        let fetcher = ListFetcher::new(source, Arc::new(RwLock::new(cache)));
        Self::new(fetcher, config.page_size)
    }

    pub fn cache(&self) -> Arc<RwLock<PageCache>> {
        self.fetcher.cache()
    }
}

/// Handler for GET /pokemon
///
/// Loads the requested page (from cache when fresh) and derives the
/// filtered list, suggestions, letter summary and pagination flags.
/// Fetch failures are reported in the body's `error` field.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(PokedexError::InvalidRequest(error_msg));
    }

    let page = query.page();
    let list = state.fetcher.fetch(page, state.page_size).await;

    Ok(Json(ListResponse::from_state(
        list,
        page,
        state.page_size,
        query.search(),
    )))
}

/// Handler for GET /pokemon/:name
///
/// Fetches the selected Pokémon's detail. Never cached.
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DetailResponse>> {
    let detail = state.fetcher.fetch_detail_by_name(&name).await?;
    Ok(Json(DetailResponse::from(detail)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.fetcher.cache_stats().await;
    Json(StatsResponse::new(&stats, state.fetcher.network_fetches()))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>> {
    let removed = state.fetcher.clear_cache().await?;
    Ok(Json(ClearResponse::new(removed)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
