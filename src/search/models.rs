// src/search/models.rs
// =============================================================================
// This module defines the data types that travel to and from the search API.
//
// Two directions:
// - SearchRequest: what we ask for (query, how many results, which page)
// - SearchResponse: what the API sends back, decoded from JSON
//
// The response types mirror the Brave web search JSON schema. We only ever
// read `web.results[].url`, but the rest of the structure is kept so the
// decoded value is a faithful picture of what the API returned.
//
// Every field has a default. A response missing `web` (or `web.results`)
// simply decodes to "zero results" instead of failing, and unknown fields
// are ignored so new API fields never break us. An explicit `null` is
// treated the same as a missing field.
// =============================================================================

// Most response fields are decoded but never read
#![allow(dead_code)]

use serde::{Deserialize, Deserializer};

/// Results per page. 20 is the documented maximum for `count`.
pub const PAGE_SIZE: u32 = 20;

/// Highest `offset` the API accepts.
pub const MAX_OFFSET: u32 = 9;

// One page worth of search parameters
//
// Built by the aggregator for every page and never modified afterwards.
// `query` is the user's query WITHOUT the `site:` prefix; the prefix is
// added when the request goes on the wire (see `search_term`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub count: u32,
    pub offset: u32,
}

impl SearchRequest {
    /// Builds the request for one page of a site-restricted search.
    ///
    /// `count` is always PAGE_SIZE and `offset` is capped at MAX_OFFSET.
    pub fn page(query: &str, offset: u32) -> Self {
        SearchRequest {
            query: query.to_string(),
            count: PAGE_SIZE,
            offset: offset.min(MAX_OFFSET),
        }
    }

    /// The value sent as the `q` parameter, e.g. "site:example.com".
    pub fn search_term(&self) -> String {
        format!("site:{}", self.query)
    }
}

// Reads a field that may be `null`, falling back to its default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// The top-level JSON document returned by the web search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub query: Option<QueryInfo>,
    pub mixed: Option<Mixed>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub web: Option<WebResults>,
}

impl SearchResponse {
    /// The web results on this page (empty if the API sent none).
    pub fn results(&self) -> &[SearchResult] {
        self.web
            .as_ref()
            .map(|web| web.results.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates over the URL of every web result on this page.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.results().iter().map(|result| result.url.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub original: String,
    #[serde(deserialize_with = "null_as_default")]
    pub show_strict_warning: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_navigational: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mixed {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub main: Vec<MixedEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MixedEntry {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    pub index: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub all: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebResults {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
}

// A single web result
//
// Only `url` matters to us; the rest is carried along untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_source_local: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_source_both: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub language: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub family_friendly: bool,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    pub subtype: Option<String>,
    pub meta_url: Option<MetaUrl>,
    pub age: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetaUrl {
    #[serde(deserialize_with = "null_as_default")]
    pub scheme: String,
    #[serde(deserialize_with = "null_as_default")]
    pub netloc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub favicon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
}
