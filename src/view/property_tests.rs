//! Property-Based Tests for View Module
//!
//! Uses proptest to check the filtering and summary derivations.

use proptest::prelude::*;

use crate::models::PokemonSummary;
use crate::view::{filter_by_name, letter_counts, suggestions, Pagination, MAX_SUGGESTIONS};

// == Strategies ==
fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z][a-z\\-]{0,11}", 0..24)
}

fn to_page(names: &[String]) -> Vec<PokemonSummary> {
    names
        .iter()
        .map(|n| PokemonSummary::new(n.clone(), format!("https://pokeapi.co/api/v2/pokemon/{}/", n)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every kept entry matches the query and nothing matching is dropped.
    #[test]
    fn prop_filter_exact(names in names_strategy(), query in "[a-zA-Z]{0,3}") {
        let page = to_page(&names);
        let filtered = filter_by_name(&page, &query);
        let needle = query.to_lowercase();

        for p in &filtered {
            prop_assert!(p.name.to_lowercase().contains(&needle));
        }
        let expected = page.iter().filter(|p| p.name.to_lowercase().contains(&needle)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    // Letter counts add up to the number of displayed names.
    #[test]
    fn prop_letter_counts_sum(names in names_strategy(), query in "[a-z]{0,2}") {
        let page = to_page(&names);
        let filtered = filter_by_name(&page, &query);
        let shown = filtered.len();
        let counts = letter_counts(filtered);

        prop_assert_eq!(counts.values().sum::<usize>(), shown);
        for letter in counts.keys() {
            prop_assert_eq!(letter.to_uppercase(), letter.clone());
        }
    }

    // Suggestions are a prefix of the filtered view.
    #[test]
    fn prop_suggestions_prefix_of_filter(names in names_strategy(), query in "[a-z]{1,2}") {
        let page = to_page(&names);
        let filtered: Vec<String> = filter_by_name(&page, &query).iter().map(|p| p.name.clone()).collect();
        let suggested = suggestions(&page, &query, MAX_SUGGESTIONS);

        prop_assert!(suggested.len() <= MAX_SUGGESTIONS);
        prop_assert_eq!(&filtered[..suggested.len()], &suggested[..]);
    }

    // "Next" is enabled exactly when later pages still hold entries.
    #[test]
    fn prop_has_next_matches_remaining(page in 1u32..200, page_size in 1u32..50, total in 0u64..5000) {
        let pagination = Pagination::new(page, page_size, total);
        let shown_through = u64::from(page) * u64::from(page_size);

        prop_assert_eq!(pagination.has_next(), shown_through < total);
        prop_assert_eq!(pagination.has_previous(), page > 1);
    }
}
