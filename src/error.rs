// src/error.rs
// =============================================================================
// Error types for everything that can go wrong while crawling.
//
// We split errors by where they happen:
// - FetchError: the HTTP request for a word page failed
// - ParseError: we got a response, but it isn't a usable document
// - VisitError: either of the above (the crawl loop treats them the same)
// - PersistenceError: writing the output file failed (the only fatal one)
// - ConfigError: the crawl settings are invalid
//
// The `thiserror` crate generates the Display and Error impls for us from
// the #[error("...")] attributes.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// The transport could not deliver a page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request timed out")]
    Timeout,

    #[error("http error {0}")]
    Status(reqwest::StatusCode),

    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    // Maps a reqwest error onto our own variants
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status)
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// The raw markup could not be turned into a document.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("document is empty")]
    EmptyDocument,
}

/// Why a single word visit produced no record.
#[derive(Error, Debug)]
pub enum VisitError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The output could not be written.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The crawl settings don't make sense.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("vocabulary limit must be at least 1")]
    InvalidVocabularyLimit,

    #[error("request delay must be a non-negative number of seconds, got {0}")]
    InvalidDelay(f64),

    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
