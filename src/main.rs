// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (to stderr, so stdout only ever carries URLs)
// 2. Parse command-line arguments into a query
// 3. Load the API key from the environment
// 4. Page through the search results and print every unique URL
//
// Missing query or missing API key are not errors: we print a hint and
// exit 0 without touching the network.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod aggregate;     // src/aggregate/ - pagination, dedup and sort
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - API key and defaults
mod search;        // src/search/ - talking to the search API

use std::io::Write;

use aggregate::{Aggregator, FixedDelay, StopReason};
use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::{Config, ConfigError};
use search::{BraveFetcher, FetchError, Fetcher};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

// A single thread is plenty: we only ever have one request in flight
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Something unexpected (e.g. the HTTP client could not be built)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr. RUST_LOG overrides the default level, e.g.
//   RUST_LOG=info site-scout example.com
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// The main application logic
// Returns:
//   Ok(0) = finished (including "nothing to do" cases)
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let fetcher_for = |config: &Config| {
        BraveFetcher::new(config.api_key.clone(), config.endpoint.clone())
    };

    run_with(&cli, Config::from_env, fetcher_for, &mut std::io::stdout()).await
}

// Everything run() does, with the environment, the HTTP client and stdout
// handed in so tests can replace them.
//
// `load_config` and `make_fetcher` are only called once we have a query,
// and `make_fetcher` only once we have an API key: a missing query or key
// never gets as far as building an HTTP client.
async fn run_with<L, M, F>(
    cli: &Cli,
    load_config: L,
    make_fetcher: M,
    out: &mut impl Write,
) -> Result<i32>
where
    L: FnOnce() -> Result<Config, ConfigError>,
    M: FnOnce(&Config) -> Result<F, FetchError>,
    F: Fetcher,
{
    let Some(query) = cli.query() else {
        writeln!(out, "Please provide a search query as a command-line argument.")?;
        writeln!(out, "Usage: site-scout <site> [words...]")?;
        return Ok(0);
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(e @ ConfigError::MissingApiKey(_)) => {
            writeln!(out, "{}", e)?;
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    debug!(?config, %query, "Starting search");

    let fetcher = make_fetcher(&config).context("failed to create HTTP client")?;

    let aggregator = Aggregator::new(fetcher, FixedDelay::new(config.page_delay))
        .with_max_pages(config.max_pages);

    // Fetch errors are logged inside; we always get whatever was collected
    let aggregation = aggregator.aggregate(&query).await;

    if let StopReason::FetchFailed(e) = &aggregation.stop {
        warn!(
            pages = aggregation.pages_requested,
            error = %e,
            "Search stopped early, the list below may be incomplete"
        );
    }

    print_urls(&aggregation.urls, out)?;

    Ok(0)
}

// Prints one URL per line and nothing else
fn print_urls(urls: &[String], out: &mut impl Write) -> std::io::Result<()> {
    for url in urls {
        writeln!(out, "{}", url)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::API_KEY_VAR;
    use crate::search::{SearchRequest, SearchResponse};
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;

    // Answers every page with the same two URLs
    struct FixedPageFetcher;

    #[async_trait]
    impl Fetcher for FixedPageFetcher {
        async fn fetch(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
            let results = if request.offset == 0 {
                json!([{ "url": "https://example.com/b" }, { "url": "https://example.com/a" }])
            } else {
                json!([])
            };
            Ok(serde_json::from_value(json!({ "web": { "results": results } }))?)
        }
    }

    fn no_fetcher(_: &Config) -> Result<FixedPageFetcher, FetchError> {
        panic!("no fetcher should be built without a query and an API key");
    }

    fn test_config() -> Result<Config, ConfigError> {
        let mut config = Config::from_lookup(|name| {
            (name == API_KEY_VAR).then(|| "test-key".to_string())
        })?;
        config.page_delay = Duration::ZERO;
        Ok(config)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("site-scout").chain(args.iter().copied())).unwrap()
    }

    #[tokio::test]
    async fn test_missing_query_prints_usage() {
        let mut out = Vec::new();
        let config_loaded = std::cell::Cell::new(false);

        let code = run_with(
            &cli(&[]),
            || {
                config_loaded.set(true);
                test_config()
            },
            no_fetcher,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(code, 0);
        assert!(!config_loaded.get());
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Please provide a search query"));
    }

    #[tokio::test]
    async fn test_missing_api_key_never_builds_a_fetcher() {
        let mut out = Vec::new();

        let code = run_with(
            &cli(&["example.com"]),
            || Config::from_lookup(|_| None),
            no_fetcher,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Please set the BRAVE_API_KEY environment variable.\n"
        );
    }

    #[tokio::test]
    async fn test_full_run_prints_sorted_urls() {
        let mut out = Vec::new();

        let code = run_with(
            &cli(&["example.com"]),
            test_config,
            |_: &Config| Ok(FixedPageFetcher),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "https://example.com/a\nhttps://example.com/b\n"
        );
    }

    #[test]
    fn test_print_urls_one_per_line() {
        let urls = vec!["https://a.com".to_string(), "https://b.com/x".to_string()];
        let mut out = Vec::new();

        print_urls(&urls, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "https://a.com\nhttps://b.com/x\n");
    }

    #[test]
    fn test_print_nothing_for_empty_list() {
        let mut out = Vec::new();
        print_urls(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
