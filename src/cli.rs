// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The CLI is deliberately tiny: every argument is a word of the query.
//
//   site-scout example.com
//   site-scout example.com docs      -> searches for "site:example.com docs"
//
// clap still gives us --help and --version for free.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "site-scout",
    version = "0.1.0",
    about = "List every URL the Brave search index has for a site",
    long_about = "site-scout runs a site-restricted Brave web search, pages through the results, \
                  and prints every unique URL it finds in sorted order, one per line. \
                  The API key is read from the BRAVE_API_KEY environment variable."
)]
pub struct Cli {
    /// Site (and optional extra words) to search for, e.g. `example.com`
    ///
    /// All words are joined with spaces and prefixed with `site:`.
    /// Words starting with `-` (e.g. `-docs` to exclude a term) are
    /// part of the query, not flags.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// The query as typed, words joined by single spaces.
    ///
    /// Returns None when no (non-blank) query was given.
    pub fn query(&self) -> Option<String> {
        let query = self.words.join(" ");
        if query.trim().is_empty() {
            None
        } else {
            Some(query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_query() {
        let cli = Cli::try_parse_from(["site-scout", "example.com"]).unwrap();
        assert_eq!(cli.query().as_deref(), Some("example.com"));
    }

    #[test]
    fn test_words_are_space_joined() {
        let cli = Cli::try_parse_from(["site-scout", "foo", "bar"]).unwrap();
        assert_eq!(cli.query().as_deref(), Some("foo bar"));
    }

    #[test]
    fn test_hyphen_words_stay_in_query() {
        let cli = Cli::try_parse_from(["site-scout", "example.com", "-docs"]).unwrap();
        assert_eq!(cli.query().as_deref(), Some("example.com -docs"));
    }

    #[test]
    fn test_no_query() {
        let cli = Cli::try_parse_from(["site-scout"]).unwrap();
        assert_eq!(cli.query(), None);
    }

    #[test]
    fn test_blank_query() {
        let cli = Cli::try_parse_from(["site-scout", " ", ""]).unwrap();
        assert_eq!(cli.query(), None);
    }
}
