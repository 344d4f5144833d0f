// src/search/mod.rs
// =============================================================================
// This module talks to the search API.
//
// Submodules:
// - models: Request parameters and the decoded JSON response
// - fetch: The Fetcher trait and the real HTTP implementation
// - error: What can go wrong fetching one page
// =============================================================================

mod error;
mod fetch;
mod models;

// Re-export so callers can write `search::BraveFetcher` instead of
// `search::fetch::BraveFetcher`
pub use error::FetchError;
pub use fetch::{BraveFetcher, Fetcher, DEFAULT_ENDPOINT};
pub use models::SearchRequest;
#[cfg(test)]
pub use models::SearchResponse;
