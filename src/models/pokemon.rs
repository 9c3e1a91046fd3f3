//! Remote API payloads
//!
//! Shapes returned by the PokéAPI list and detail endpoints.

use serde::{Deserialize, Serialize};

/// One entry of a list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    /// Detail resource for this Pokémon
    pub url: String,
}

impl PokemonSummary {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A page of the remote collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Entries of this page, in remote order
    pub results: Vec<PokemonSummary>,
    /// Total number of Pokémon across all pages
    pub count: u64,
}

/// Full record for a single Pokémon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub sprites: Sprites,
}

impl PokemonDetail {
    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|slot| slot.kind.name.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}
