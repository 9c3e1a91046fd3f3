//! Pokédex - A Pokémon list service with a TTL page cache
//!
//! Fetches pages from PokéAPI, serves repeat requests from a keyed page cache,
//! and derives the filtered list, suggestions and letter summary a browser UI
//! renders.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod tasks;
pub mod view;

pub use api::AppState;
pub use config::Config;
pub use error::PokedexError;
pub use fetcher::{ListFetcher, ListState};
pub use tasks::spawn_cleanup_task;
