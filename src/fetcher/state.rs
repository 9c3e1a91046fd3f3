//! List State Module
//!
//! The snapshot a list fetch hands back to the presentation layer.

use serde::Serialize;

use crate::models::{PageResult, PokemonSummary};

// == List State ==
/// Currently displayed page plus request status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListState {
    /// Entries of the last successfully loaded page
    pub pokemons: Vec<PokemonSummary>,
    /// Total across all pages, from the last successful load
    pub total: u64,
    /// True while a network fetch is in flight
    pub loading: bool,
    /// Message from the last failed fetch, cleared when a new one starts
    pub error: Option<String>,
}

impl ListState {
    /// A settled state showing `page`.
    pub(crate) fn loaded(page: PageResult) -> Self {
        Self {
            pokemons: page.results,
            total: page.count,
            loading: false,
            error: None,
        }
    }

    /// A settled copy of this state carrying `message`, keeping its page.
    pub(crate) fn failed(&self, message: String) -> Self {
        Self {
            pokemons: self.pokemons.clone(),
            total: self.total,
            loading: false,
            error: Some(message),
        }
    }

    /// Settles the state on a loaded page.
    pub(crate) fn show(&mut self, page: PageResult) {
        self.pokemons = page.results;
        self.total = page.count;
        self.loading = false;
        self.error = None;
    }

    /// Settles the state on a failure, keeping the previous page.
    pub(crate) fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Marks a network fetch as started.
    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_keeps_previous_page() {
        let mut state = ListState::default();
        state.show(PageResult {
            results: vec![PokemonSummary::new("mew", "https://pokeapi.co/api/v2/pokemon/151/")],
            count: 1302,
        });

        state.begin();
        assert!(state.loading);

        state.fail("Network error: timed out".to_string());
        assert!(!state.loading);
        assert_eq!(state.total, 1302);
        assert_eq!(state.pokemons.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Network error: timed out"));
    }

    #[test]
    fn test_failed_copy_leaves_original_untouched() {
        let mut state = ListState::default();
        state.show(PageResult {
            results: vec![PokemonSummary::new("mew", "https://pokeapi.co/api/v2/pokemon/151/")],
            count: 1302,
        });
        state.begin();

        let copy = state.failed("Invalid request: page must be positive".to_string());
        assert!(!copy.loading);
        assert_eq!(copy.pokemons, state.pokemons);
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_begin_clears_error() {
        let mut state = ListState::default();
        state.fail("boom".to_string());
        state.begin();
        assert!(state.error.is_none());
    }
}
