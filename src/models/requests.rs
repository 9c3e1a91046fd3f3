//! Request DTOs for the Pokédex API
//!
//! Defines the query parameters accepted by incoming HTTP requests.

use serde::Deserialize;

/// Query string for the list endpoint (GET /pokemon)
///
/// # Fields
/// - `page`: 1-based page number (defaults to 1)
/// - `search`: Free-text name filter applied to the fetched page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<u32>,
    /// Name filter, empty means no filtering
    #[serde(default)]
    pub search: Option<String>,
}

impl ListQuery {
    /// Returns the requested page, defaulting to the first one.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Returns the search text, trimmed.
    pub fn search(&self) -> &str {
        self.search.as_deref().map(str::trim).unwrap_or("")
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.page() == 0 {
            return Some("Page must be a positive integer".to_string());
        }
        None
    }
}
