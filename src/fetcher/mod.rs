//! Fetcher Module
//!
//! The list fetcher and the state it exposes.

mod list;
mod state;

pub use list::ListFetcher;
pub use state::ListState;
