//! Client Module
//!
//! Remote data source for list pages and Pokémon details.

mod pokeapi;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{PageResult, PokemonDetail};

pub use pokeapi::PokeApiClient;

// == Pokemon Source Trait ==
/// Where list pages and details come from.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetches `limit` entries starting at zero-based `offset`.
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<PageResult>;

    /// Fetches the detail resource at `url`.
    async fn fetch_detail(&self, url: &str) -> Result<PokemonDetail>;

    /// Detail resource URL for a Pokémon name.
    fn detail_url(&self, name: &str) -> String;
}
