// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
//   lexicrawl crawl [SEED]   crawl outward from SEED (default: thesaurus)
//   lexicrawl word  [WORD]   extract a single word, no crawling
//
// Every crawl setting can also come from an environment variable, which is
// handy for scheduled runs:
//   LEXICRAWL_VOCABULARY_LIMIT, LEXICRAWL_REQUEST_DELAY_SECONDS,
//   LEXICRAWL_BASE_URL, LEXICRAWL_OUTPUT_DIR
// Command-line flags win over environment variables.
// =============================================================================

use crate::config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_DELAY_SECONDS, DEFAULT_VOCABULARY_LIMIT};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SEED: &str = "thesaurus";

#[derive(Parser, Debug)]
#[command(
    name = "lexicrawl",
    version = "0.1.0",
    about = "Crawl an online dictionary and save structured word entries as JSON",
    long_about = "lexicrawl visits dictionary pages breadth-first, starting from a seed word and \
                  following links to related words, and saves headwords, parts of speech, \
                  pronunciations, definitions and examples to <seed>_data.json."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl outward from a seed word and save every word found
    ///
    /// Example: lexicrawl crawl cat --vocabulary-limit 20
    Crawl {
        /// Word to start from
        #[arg(default_value = DEFAULT_SEED)]
        seed: String,

        /// Maximum number of distinct words to try
        #[arg(long, env = "LEXICRAWL_VOCABULARY_LIMIT", default_value_t = DEFAULT_VOCABULARY_LIMIT)]
        vocabulary_limit: usize,

        /// Seconds to wait between two requests
        #[arg(long, env = "LEXICRAWL_REQUEST_DELAY_SECONDS", default_value_t = DEFAULT_REQUEST_DELAY_SECONDS)]
        request_delay_seconds: f64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract a single word's page without following links
    ///
    /// Example: lexicrawl word thesaurus
    Word {
        /// Word to look up
        #[arg(default_value = DEFAULT_SEED)]
        word: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Where pages come from and where results go.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Dictionary URL that word pages live under
    #[arg(long, env = "LEXICRAWL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory to write <word>_data.json into
    #[arg(long, env = "LEXICRAWL_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_crawl_defaults() {
        let cli = Cli::try_parse_from(["lexicrawl", "crawl"]).unwrap();
        match cli.command {
            Commands::Crawl {
                seed,
                vocabulary_limit,
                request_delay_seconds,
                output,
            } => {
                assert_eq!(seed, "thesaurus");
                assert_eq!(vocabulary_limit, 50);
                assert_eq!(request_delay_seconds, 1.0);
                assert_eq!(output.output_dir, PathBuf::from("."));
            }
            other => panic!("expected crawl, got {:?}", other),
        }
    }

    #[test]
    fn test_crawl_flags() {
        let cli = Cli::try_parse_from([
            "lexicrawl",
            "crawl",
            "cat",
            "--vocabulary-limit",
            "5",
            "--request-delay-seconds",
            "0.25",
            "--output-dir",
            "out",
        ])
        .unwrap();
        match cli.command {
            Commands::Crawl {
                seed,
                vocabulary_limit,
                request_delay_seconds,
                output,
            } => {
                assert_eq!(seed, "cat");
                assert_eq!(vocabulary_limit, 5);
                assert_eq!(request_delay_seconds, 0.25);
                assert_eq!(output.output_dir, PathBuf::from("out"));
            }
            other => panic!("expected crawl, got {:?}", other),
        }
    }

    #[test]
    fn test_word_subcommand() {
        let cli = Cli::try_parse_from(["lexicrawl", "word", "cat"]).unwrap();
        assert!(matches!(cli.command, Commands::Word { ref word, .. } if word == "cat"));
    }
}
