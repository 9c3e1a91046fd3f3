//! Error types for the Pokédex service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for fetching, caching and serving Pokémon data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PokedexError {
    /// Request failed to complete or the remote API answered with a non-2xx status
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was missing expected fields or was not valid JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Requested Pokémon does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Persisted cache slot could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for PokedexError {
    fn into_response(self) -> Response {
        let status = match &self {
            PokedexError::NotFound(_) => StatusCode::NOT_FOUND,
            PokedexError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PokedexError::Network(_) | PokedexError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            PokedexError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokédex service.
pub type Result<T> = std::result::Result<T, PokedexError>;
