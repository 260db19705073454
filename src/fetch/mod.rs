// src/fetch/mod.rs
// =============================================================================
// This module downloads dictionary pages.
//
// The crawl engine only knows about the Fetcher trait, so tests can hand it
// an in-memory fetcher instead of hitting the real dictionary.
// =============================================================================

mod http;

pub use http::{word_url, Fetcher, HttpFetcher};
