// src/crawl/engine.rs
// =============================================================================
// The crawl loop: fetch a word, extract it, follow its cross-references.
//
// How it works:
// 1. Start with the seed word in the frontier
// 2. Ask CrawlState for the next word (it handles the budget and duplicates)
// 3. Fetch the page ONCE and run both extractors on that same page
// 4. Record the result (success or failure) back into CrawlState
// 5. Wait request_delay before the next word
// 6. Repeat until the state says we're finished, or we're cancelled
//
// Politeness:
// - Exactly one request in flight at a time
// - A fixed pause between requests (no adaptive backoff)
//
// Failures never stop the crawl: a word whose page can't be fetched or
// parsed is marked visited and skipped for the rest of the run.
// =============================================================================

use crate::config::CrawlConfig;
use crate::crawl::state::{CrawlState, CrawlStatus, Step, VisitOutcome};
use crate::error::{ParseError, VisitError};
use crate::extract::{extract_entries, extract_related_words, Page};
use crate::fetch::{word_url, Fetcher};
use crate::model::{Corpus, Entry, WordRecord};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use url::Url;

/// Everything a finished crawl produced.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub status: CrawlStatus,
    /// Records for the words that worked, in visit order
    pub corpus: Corpus,
    /// Every word tried, in visit order
    pub visited: Vec<String>,
    /// Words whose fetch or parse failed
    pub failed: Vec<String>,
}

pub struct CrawlEngine<F> {
    fetcher: F,
    config: CrawlConfig,
    shutdown: CancellationToken,
}

impl<F: Fetcher> CrawlEngine<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Self {
            fetcher,
            config,
            shutdown: CancellationToken::new(),
        }
    }

    /// Stops the crawl between two words once `token` is cancelled.
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    // Crawls breadth-first from `seed`
    //
    // Returns: a CrawlReport; never fails (per-word errors are contained)
    pub async fn crawl(&self, seed: &str) -> CrawlReport {
        let limit = self.config.vocabulary_limit();
        let mut state = CrawlState::seeded(seed);
        let mut first_visit = true;

        info!(seed, limit, delay = ?self.config.request_delay(), "starting crawl");

        let status = loop {
            if self.shutdown.is_cancelled() {
                break CrawlStatus::Cancelled;
            }

            let (next, step) = state.next_step(limit);
            state = next;

            let word = match step {
                Step::Visit(word) => word,
                Step::Finished(status) => break status,
            };

            if !first_visit && !self.pause().await {
                break CrawlStatus::Cancelled;
            }
            first_visit = false;

            let outcome = match self.visit(&word).await {
                Ok((entries, related)) => {
                    info!(
                        word = %word,
                        entries = entries.len(),
                        related = related.len(),
                        visited = state.visited_count() + 1,
                        "visited word"
                    );
                    VisitOutcome::Fetched { entries, related }
                }
                Err(e) => {
                    warn!(word = %word, error = %e, "failed to visit word");
                    VisitOutcome::Failed
                }
            };

            state = state.apply(word, outcome);
        };

        info!(
            ?status,
            visited = state.visited_count(),
            records = state.corpus().len(),
            pending = state.frontier().len(),
            "crawl finished"
        );

        let (visited, failed, corpus) = state.into_parts();
        CrawlReport {
            status,
            corpus,
            visited,
            failed,
        }
    }

    // Fetches and extracts a single word without following any links
    pub async fn extract_word(&self, word: &str) -> Result<WordRecord, VisitError> {
        let (entries, _related) = self.visit(word).await?;
        Ok(WordRecord::new(word, entries))
    }

    // One fetch, one parse, both extractors
    async fn visit(&self, word: &str) -> Result<(Vec<Entry>, Vec<String>), VisitError> {
        let base = self.config.base_url();
        let url = word_url(base, word)?;
        let raw = self.fetcher.fetch(&url).await?;
        extract_page(&raw, base).map_err(VisitError::from)
    }

    // Waits out the politeness delay; false if cancelled while waiting
    async fn pause(&self) -> bool {
        tokio::select! {
            _ = self.shutdown.cancelled() => false,
            _ = tokio::time::sleep(self.config.request_delay()) => true,
        }
    }
}

// Kept synchronous: the parsed Page must not live across an .await
fn extract_page(raw: &str, base: &Url) -> Result<(Vec<Entry>, Vec<String>), ParseError> {
    let page = Page::parse(raw)?;
    Ok((extract_entries(&page), extract_related_words(&page, base)))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does CrawlEngine take a generic F: Fetcher?
//    - In production F is HttpFetcher (real network)
//    - In tests F is an in-memory fetcher, so we can check the crawl logic
//      quickly and without internet
//
// 2. What is `break value` in a loop?
//    - `loop` is an expression; `break X` makes the whole loop evaluate to X
//    - We use it to get the final CrawlStatus out of the loop
//
// 3. What does tokio::select! do?
//    - Waits on several futures and runs the branch of whichever finishes first
//    - Here: either the delay ends, or someone cancels the crawl
//
// 4. Why is `state = state.apply(...)` written like that?
//    - apply() takes the state by value and returns the updated one
//    - Ownership makes it impossible to accidentally use the old state
// -----------------------------------------------------------------------------
