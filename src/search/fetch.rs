// src/search/fetch.rs
// =============================================================================
// This module fetches one page of search results from the Brave web search API.
//
// How it works:
// 1. Build the request URL: endpoint + q=site:<query> + count + offset
// 2. Send a GET with the Accept and X-Subscription-Token headers
// 3. Anything other than 200 OK is an error (we keep the status code)
// 4. Decode the body into a SearchResponse
//
// The `Fetcher` trait is the seam between the aggregator and the network.
// Production code uses `BraveFetcher`; tests plug in a scripted fake.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::error::FetchError;
use super::models::{SearchRequest, SearchResponse};

/// The Brave web search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

// Header carrying the API credential
const TOKEN_HEADER: &str = "X-Subscription-Token";

// How much of an error body we keep for the diagnostic message
const BODY_EXCERPT_CHARS: usize = 200;

/// Fetches a single page of results for a request.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError>;
}

// Talks to the real search API
//
// The API key and endpoint are handed in by the caller (see config.rs),
// so nothing in here reads the environment.
#[derive(Debug, Clone)]
pub struct BraveFetcher {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl BraveFetcher {
    /// Creates a fetcher for the given credential and endpoint.
    ///
    /// Uses the transport's default timeout and never retries.
    pub fn new(api_key: impl Into<String>, endpoint: Url) -> Result<Self, FetchError> {
        let client = Client::builder().build()?;

        Ok(BraveFetcher {
            client,
            api_key: api_key.into(),
            endpoint,
        })
    }

    // Builds the full request URL, e.g.
    //   https://api.search.brave.com/res/v1/web/search?q=site%3Aexample.com&count=20&offset=0
    //
    // query_pairs_mut() takes care of percent-encoding the query for us
    fn request_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &request.search_term())
            .append_pair("count", &request.count.to_string())
            .append_pair("offset", &request.offset.to_string());
        url
    }
}

#[async_trait]
impl Fetcher for BraveFetcher {
    async fn fetch(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        let url = self.request_url(request);
        debug!(offset = request.offset, %url, "Sending search request");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(TOKEN_HEADER, self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            // The body usually explains the failure (bad token, rate limit...)
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let body = response.text().await?;
        let decoded: SearchResponse = serde_json::from_str(&body)?;

        debug!(
            offset = request.offset,
            results = decoded.results().len(),
            "Received search response"
        );

        Ok(decoded)
    }
}

// Shortens a response body for use in an error message
fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > BODY_EXCERPT_CHARS {
        let short: String = trimmed.chars().take(BODY_EXCERPT_CHARS).collect();
        format!("{}...", short)
    } else {
        trimmed.to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[async_trait]?
//    - Lets a trait have async methods that work behind generics and Box<dyn>
//    - It rewrites `async fn` into a method returning a boxed future
//
// 2. Why check for exactly 200 and not is_success()?
//    - The API only ever answers a good search with 200
//    - Anything else (even 204) means we did not get results to decode
//
// 3. Why read the body as text before decoding?
//    - serde_json gives precise error messages (line/column) on bad JSON
//    - Transport problems and decode problems end up as different errors
// -----------------------------------------------------------------------------
