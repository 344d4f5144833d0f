// src/config.rs
// =============================================================================
// Runtime settings for a search run.
//
// The only thing the user has to provide is the API key, read from the
// BRAVE_API_KEY environment variable. Everything else has a default.
//
// The environment is read in exactly one place (`Config::from_env`) and the
// resulting value is passed to the fetcher and aggregator. Tests use
// `Config::from_lookup` with a closure instead of touching real env vars.
// =============================================================================

use std::fmt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::aggregate::{DEFAULT_PAGE_DELAY, MAX_PAGES};
use crate::search::DEFAULT_ENDPOINT;

/// Environment variable holding the search API credential.
pub const API_KEY_VAR: &str = "BRAVE_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Please set the {0} environment variable.")]
    MissingApiKey(&'static str),

    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: Url,
    pub max_pages: u32,
    pub page_delay: Duration,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration using `lookup` to resolve variables.
    ///
    /// An empty API key counts as missing.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        Ok(Config {
            api_key,
            endpoint: Url::parse(DEFAULT_ENDPOINT)?,
            max_pages: MAX_PAGES,
            page_delay: DEFAULT_PAGE_DELAY,
        })
    }
}

// Keep the credential out of logs and panic messages
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("max_pages", &self.max_pages)
            .field("page_delay", &self.page_delay)
            .finish()
    }
}
