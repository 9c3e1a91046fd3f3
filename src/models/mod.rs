//! Data models
//!
//! Remote API payloads plus the DTOs used for serializing/deserializing
//! HTTP request and response bodies.

pub mod pokemon;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use pokemon::{NamedResource, PageResult, PokemonDetail, PokemonSummary, Sprites, TypeSlot};
pub use requests::ListQuery;
pub use responses::{ClearResponse, DetailResponse, HealthResponse, ListResponse, StatsResponse};
