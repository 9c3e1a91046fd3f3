//! PokéAPI Client
//!
//! reqwest-backed access to the list and detail endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::PokemonSource;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{PageResult, PokemonDetail};

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    http: Client,
}

impl PokeApiClient {
    /// Builds a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PokedexError::Network(err.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| PokedexError::Network(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(PokedexError::Network(format!(
                "PokéAPI returned HTTP {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| PokedexError::Network(err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| PokedexError::MalformedResponse(err.to_string()))
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<PageResult> {
        let url = format!("{}/pokemon?offset={}&limit={}", self.base_url, offset, limit);
        self.get_json(&url).await
    }

    async fn fetch_detail(&self, url: &str) -> Result<PokemonDetail> {
        self.get_json(url).await
    }

    fn detail_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(
            client.detail_url("pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = PokeApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = client.fetch_page(0, 12).await;
        assert!(matches!(result, Err(PokedexError::Network(_))));
    }
}
