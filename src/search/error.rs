// src/search/error.rs
// =============================================================================
// Everything that can go wrong while fetching a single page of results.
//
// Each variant is terminal for that one request: nothing here is retried.
// The aggregator decides what a failure means for the whole run.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Building, sending, or reading the HTTP request failed
    /// (DNS, connection refused, TLS, body read, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK
    #[error("request failed with status code {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not JSON we could understand
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status code, if the failure was a non-200 response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
