//! Name Filtering Module
//!
//! Client-side search over an already fetched page. Never touches the network.

use crate::models::PokemonSummary;

/// Maximum number of autocomplete suggestions shown under the search box.
pub const MAX_SUGGESTIONS: usize = 5;

// == Filter ==
/// Returns the entries whose name contains `query`, ignoring case.
///
/// Order is preserved. An empty query keeps every entry.
pub fn filter_by_name<'a>(pokemons: &'a [PokemonSummary], query: &str) -> Vec<&'a PokemonSummary> {
    let needle = query.to_lowercase();
    pokemons
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

// == Suggestions ==
/// Returns up to `max` names matching `query`, in page order.
///
/// Nothing is suggested until the user has typed something.
pub fn suggestions(pokemons: &[PokemonSummary], query: &str, max: usize) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    filter_by_name(pokemons, query)
        .into_iter()
        .take(max)
        .map(|p| p.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(names: &[&str]) -> Vec<PokemonSummary> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| PokemonSummary::new(*n, format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1)))
            .collect()
    }

    #[test]
    fn test_filter_substring_match() {
        let pokemons = page(&["bulbasaur", "charmander", "caterpie"]);
        let filtered = filter_by_name(&pokemons, "ch");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "charmander");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let pokemons = page(&["bulbasaur", "Charmander"]);
        let filtered = filter_by_name(&pokemons, "CHAR");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Charmander");
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        let pokemons = page(&["bulbasaur", "ivysaur", "venusaur"]);
        assert_eq!(filter_by_name(&pokemons, "").len(), 3);
    }

    #[test]
    fn test_filter_preserves_order() {
        let pokemons = page(&["venusaur", "bulbasaur", "ivysaur"]);
        let names: Vec<_> = filter_by_name(&pokemons, "saur")
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(names, vec!["venusaur", "bulbasaur", "ivysaur"]);
    }

    #[test]
    fn test_suggestions_capped() {
        let pokemons = page(&["pidgey", "pidgeotto", "pidgeot", "pikachu", "pichu", "piplup"]);
        let names = suggestions(&pokemons, "pi", MAX_SUGGESTIONS);

        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "pidgey");
        assert!(!names.contains(&"piplup".to_string()));
    }

    #[test]
    fn test_suggestions_empty_query() {
        let pokemons = page(&["pikachu"]);
        assert!(suggestions(&pokemons, "", MAX_SUGGESTIONS).is_empty());
    }
}
