// src/crawl/mod.rs
// =============================================================================
// This module handles crawling the dictionary word by word.
//
// Features:
// - Breadth-first crawling starting from a seed word
// - A vocabulary limit on how many distinct words are tried
// - Each word tried at most once, even if many pages link to it
// - Polite crawling with a fixed delay between requests
// - Clean stop between words on cancellation
//
// Submodules:
// - state: frontier / visited set / corpus and the pure step functions
// - engine: the async loop that fetches pages and drives the state
// =============================================================================

mod engine;
mod state;

pub use engine::CrawlEngine;
pub use state::CrawlStatus;
