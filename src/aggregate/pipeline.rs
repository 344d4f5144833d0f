// src/aggregate/pipeline.rs
// =============================================================================
// This module drives the fetcher across pages and merges the results.
//
// How it works:
// 1. Request page 0, then 1, 2, ... up to max_pages (pausing in between)
// 2. Stop early on the first page that comes back empty
// 3. Stop early (keeping what we have) if a request fails
// 4. Deduplicate all collected URLs and sort them
//
// The offset goes up by one per page. The API documents `offset` as a page
// index (0..=9) and `count` as the page size, so page N is offset N.
// =============================================================================

use std::collections::HashSet;
use tracing::{error, info};

use super::pacer::Pacer;
use crate::search::{FetchError, Fetcher, SearchRequest};

/// Most pages a single run will request (offsets 0 through 8).
pub const MAX_PAGES: u32 = 9;

/// Why the pagination loop ended.
#[derive(Debug)]
pub enum StopReason {
    /// A page came back with zero results
    Exhausted,
    /// We requested max_pages pages
    PageLimit,
    /// A request failed; earlier pages were kept
    FetchFailed(FetchError),
}

// The outcome of one run
#[derive(Debug)]
pub struct Aggregation {
    /// Unique URLs in ascending order
    pub urls: Vec<String>,
    /// How many page requests were made (including a failed one)
    pub pages_requested: u32,
    pub stop: StopReason,
}

pub struct Aggregator<F, P> {
    fetcher: F,
    pacer: P,
    max_pages: u32,
}

impl<F: Fetcher, P: Pacer> Aggregator<F, P> {
    /// Creates an aggregator that requests up to MAX_PAGES pages.
    pub fn new(fetcher: F, pacer: P) -> Self {
        Aggregator {
            fetcher,
            pacer,
            max_pages: MAX_PAGES,
        }
    }

    /// Limits the number of pages, clamped to 1..=MAX_PAGES.
    ///
    /// A value of 1 gives a single-shot search.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.clamp(1, MAX_PAGES);
        self
    }

    /// Runs the search for `query` and returns every unique URL found.
    ///
    /// Never fails: a fetch error ends pagination and the URLs gathered
    /// from earlier pages are still returned (see `Aggregation::stop`).
    pub async fn aggregate(&self, query: &str) -> Aggregation {
        let mut collected: Vec<String> = Vec::new();
        let mut pages_requested = 0;
        let mut stop = StopReason::PageLimit;

        for offset in 0..self.max_pages {
            // Respect the API rate limit between requests
            if offset > 0 {
                self.pacer.pause().await;
            }

            let request = SearchRequest::page(query, offset);
            pages_requested += 1;

            match self.fetcher.fetch(&request).await {
                Ok(response) => {
                    let count = response.results().len();
                    info!(offset, results = count, "Fetched page");

                    if count == 0 {
                        stop = StopReason::Exhausted;
                        break;
                    }

                    collected.extend(response.urls().map(str::to_string));
                }
                Err(e) => {
                    error!(
                        offset,
                        status = ?e.status(),
                        error = %e,
                        "Search request failed, keeping earlier results"
                    );
                    stop = StopReason::FetchFailed(e);
                    break;
                }
            }
        }

        let urls = dedup_and_sort(collected);
        info!(
            pages = pages_requested,
            unique_urls = urls.len(),
            stop = ?stop,
            "Search finished"
        );

        Aggregation {
            urls,
            pages_requested,
            stop,
        }
    }
}

/// Removes duplicate URLs (exact string match) and sorts ascending.
///
/// Empty strings (results the API sent without a URL) are dropped.
pub fn dedup_and_sort(urls: impl IntoIterator<Item = String>) -> Vec<String> {
    // A HashSet keeps only one copy of each URL
    let unique: HashSet<String> = urls.into_iter().filter(|url| !url.is_empty()).collect();

    let mut urls: Vec<String> = unique.into_iter().collect();
    urls.sort();
    urls
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why generics (Aggregator<F, P>) instead of a concrete client?
//    - The aggregator only needs "something that can fetch a page" and
//      "something that can wait"
//    - In production that is BraveFetcher + FixedDelay(1s)
//    - In tests it is an in-memory fake + a zero delay, so tests are instant
//
// 2. Why HashSet then sort, instead of just sorting?
//    - HashSet drops duplicates in one pass
//    - sort() then gives a stable, predictable output order
//    - Two URLs are "the same" only if the strings are byte-for-byte equal,
//      so "https://a.com" and "https://a.com/" both survive
//
// 3. Why does aggregate() return a plain value instead of Result?
//    - A failed page should not throw away the pages we already have
//    - The failure is recorded in `stop` so the caller can still see it
// -----------------------------------------------------------------------------
