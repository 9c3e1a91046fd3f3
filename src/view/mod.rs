//! View Module
//!
//! Pure derivations the presentation layer computes from a fetched page:
//! name filtering, autocomplete suggestions, letter summary and page bounds.

mod filter;
mod pagination;
mod summary;

#[cfg(test)]
mod property_tests;

pub use filter::{filter_by_name, suggestions, MAX_SUGGESTIONS};
pub use pagination::{offset, Pagination};
pub use summary::letter_counts;
