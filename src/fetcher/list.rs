//! List Fetcher Module
//!
//! Mediates between the presentation layer and the remote API: serves pages
//! from the page cache when fresh, fetches them otherwise, and keeps the
//! loading/error state the UI renders.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{watch, Mutex as AsyncMutex, RwLock};
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, PageCache, PageKey, SlotWrite};
use crate::client::PokemonSource;
use crate::error::{PokedexError, Result};
use crate::fetcher::ListState;
use crate::models::{PageResult, PokemonDetail};
use crate::view::offset;

/// Outcome of a network fetch, published to every request waiting on it.
type Flight = watch::Receiver<Option<Result<PageResult>>>;
type Flights = Mutex<HashMap<PageKey, Flight>>;

// == List Fetcher ==
pub struct ListFetcher {
    source: Arc<dyn PokemonSource>,
    /// Shared with the cleanup task
    cache: Arc<RwLock<PageCache>>,
    state: RwLock<ListState>,
    /// Bumped by every request; only the latest may settle the state
    generation: AtomicU64,
    /// Network fetches currently running, one per key
    flights: Flights,
    /// Serializes writes of the persisted slot
    slot_lock: AsyncMutex<()>,
    network_fetches: AtomicU64,
}

impl ListFetcher {
    pub fn new(source: Arc<dyn PokemonSource>, cache: Arc<RwLock<PageCache>>) -> Self {
        Self {
            source,
            cache,
            state: RwLock::new(ListState::default()),
            generation: AtomicU64::new(0),
            flights: Mutex::new(HashMap::new()),
            slot_lock: AsyncMutex::new(()),
            network_fetches: AtomicU64::new(0),
        }
    }

    pub fn cache(&self) -> Arc<RwLock<PageCache>> {
        self.cache.clone()
    }

    // == Fetch ==
    /// Loads `page` of size `limit` and returns the outcome of this request.
    ///
    /// A fresh cached page is returned without touching the network. A
    /// request for a key that is already being fetched waits for that fetch
    /// instead of issuing its own. On failure the returned state carries the
    /// error next to the last page shown.
    ///
    /// The shared state behind [`ListFetcher::state`] is only settled by the
    /// most recently started request; older completions leave it alone.
    pub async fn fetch(&self, page: u32, limit: u32) -> ListState {
        if page == 0 || limit == 0 {
            let message =
                PokedexError::InvalidRequest("page and limit must be positive integers".to_string())
                    .to_string();
            return self.state.read().await.failed(message);
        }

        let key = PageKey::new(page, limit);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let cached = self.cache.write().await.get(key);
        let result = match cached {
            Some(data) => Ok(data),
            None => {
                {
                    let mut state = self.state.write().await;
                    if self.is_latest(generation) {
                        state.begin();
                    }
                }
                self.load(key).await
            }
        };

        let mut state = self.state.write().await;
        let latest = self.is_latest(generation);
        if !latest {
            debug!(%key, generation, "newer request started, leaving shared state alone");
        }

        match result {
            Ok(data) => {
                if latest {
                    state.show(data.clone());
                }
                ListState::loaded(data)
            }
            Err(err) => {
                let message = err.to_string();
                if latest {
                    state.fail(message.clone());
                }
                state.failed(message)
            }
        }
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    // == Load ==
    /// Fetches `key` from the network, joining a fetch already in flight.
    async fn load(&self, key: PageKey) -> Result<PageResult> {
        loop {
            let joined = {
                let mut flights = lock_flights(&self.flights);
                match flights.get(&key) {
                    Some(flight) => Err(flight.clone()),
                    None => {
                        let (tx, rx) = watch::channel(None);
                        flights.insert(key, rx);
                        Ok(tx)
                    }
                }
            };

            match joined {
                Ok(tx) => return self.lead(key, tx).await,
                Err(mut flight) => {
                    debug!(%key, "joining in-flight fetch");
                    let outcome = flight.wait_for(Option::is_some).await.map(|v| (*v).clone());
                    if let Ok(Some(result)) = outcome {
                        return result;
                    }
                    // The leading request was dropped before it finished
                }
            }
        }
    }

    async fn lead(
        &self,
        key: PageKey,
        tx: watch::Sender<Option<Result<PageResult>>>,
    ) -> Result<PageResult> {
        let flight = FlightGuard {
            flights: &self.flights,
            key,
        };

        self.network_fetches.fetch_add(1, Ordering::SeqCst);
        debug!(%key, "fetching page");

        let result = self.source.fetch_page(offset(key.page, key.limit), key.limit).await;

        match &result {
            Ok(data) => {
                info!(%key, count = data.count, entries = data.results.len(), "page loaded");
                let slot = self.cache.write().await.insert(key, data.clone());
                self.persist(slot).await;
            }
            Err(err) => warn!(%key, error = %err, "page fetch failed"),
        }

        drop(flight);
        tx.send_replace(Some(result.clone()));
        result
    }

    /// Saves the persisted slot off the async runtime.
    async fn persist(&self, slot: SlotWrite) {
        let key = slot.key();
        let _guard = self.slot_lock.lock().await;

        match tokio::task::spawn_blocking(move || slot.save()).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(%key, error = %err, "failed to persist cache slot"),
            Err(err) => warn!(%key, error = %err, "cache slot writer panicked"),
        }
    }

    /// Current state without issuing a request.
    pub async fn state(&self) -> ListState {
        self.state.read().await.clone()
    }

    // == Detail ==
    /// Fetches the detail resource at `url`. Never cached.
    pub async fn fetch_detail(&self, url: &str) -> Result<PokemonDetail> {
        self.source.fetch_detail(url).await.map_err(|err| {
            warn!(%url, error = %err, "detail fetch failed");
            err
        })
    }

    /// Fetches a Pokémon's detail by name.
    ///
    /// Names are matched case-insensitively and may only contain ASCII
    /// letters, digits and hyphens.
    pub async fn fetch_detail_by_name(&self, name: &str) -> Result<PokemonDetail> {
        let name = name.trim().to_ascii_lowercase();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(PokedexError::InvalidRequest(format!(
                "'{}' is not a valid Pokémon name",
                name
            )));
        }

        let url = self.source.detail_url(&name);
        self.fetch_detail(&url).await
    }

    // == Cache Management ==
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Number of list requests that went to the network.
    pub fn network_fetches(&self) -> u64 {
        self.network_fetches.load(Ordering::SeqCst)
    }

    /// Drops every cached page. Returns how many were held in memory.
    pub async fn clear_cache(&self) -> Result<usize> {
        let removed = self.cache.write().await.clear()?;
        info!(removed, "page cache cleared");
        Ok(removed)
    }
}

// == Flight Guard ==
/// Removes a key from the in-flight map when its fetch ends or is dropped.
struct FlightGuard<'a> {
    flights: &'a Flights,
    key: PageKey,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        lock_flights(self.flights).remove(&self.key);
    }
}

fn lock_flights(flights: &Flights) -> MutexGuard<'_, HashMap<PageKey, Flight>> {
    flights.lock().unwrap_or_else(PoisonError::into_inner)
}
