//! Letter Summary Module
//!
//! Counts displayed Pokémon by the first letter of their name.

use std::collections::BTreeMap;

use crate::models::PokemonSummary;

// == Letter Counts ==
/// Maps each uppercase first letter to the number of names starting with it.
///
/// Callers pass the filtered view, so the summary always matches what is on
/// screen. Empty names are skipped.
pub fn letter_counts<'a, I>(pokemons: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a PokemonSummary>,
{
    let mut counts = BTreeMap::new();

    for pokemon in pokemons {
        if let Some(first) = pokemon.name.chars().next() {
            let letter: String = first.to_uppercase().collect();
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    counts
}
