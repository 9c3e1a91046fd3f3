//! API Module
//!
//! HTTP handlers and routing for the Pokédex REST API.
//!
//! # Endpoints
//! - `GET /pokemon?page=&search=` - Current page with filter, suggestions and letter summary
//! - `GET /pokemon/:name` - Detail for one Pokémon
//! - `GET /stats` - Page cache statistics
//! - `DELETE /cache` - Drop all cached pages
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
