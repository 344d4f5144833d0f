// src/aggregate/mod.rs
// =============================================================================
// This module turns many pages of search results into one URL list.
//
// Submodules:
// - pipeline: The pagination loop, plus dedup and sort
// - pacer: The pause between page requests (rate limiting)
// =============================================================================

mod pacer;
mod pipeline;

pub use pacer::{FixedDelay, DEFAULT_PAGE_DELAY};
pub use pipeline::{Aggregator, StopReason, MAX_PAGES};
