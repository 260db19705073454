// src/crawl/state.rs
// =============================================================================
// The crawl's state machine, with no I/O in it.
//
// CrawlState holds the three things a crawl tracks:
// - frontier: words waiting to be tried (FIFO queue = breadth-first)
// - visited: words already tried, successful or not (the budget counter)
// - corpus: records for the words that worked
//
// A crawl is a loop of two calls:
//
//   let (state, step) = state.next_step(limit);   // pick the next word
//   let state = state.apply(word, outcome);       // record what happened
//
// Both take the state by value and hand it back, so the engine is just
// "fetch between the two calls", and tests can drive the loop by hand.
// =============================================================================

use crate::model::{Corpus, Entry, WordRecord};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// How a finished crawl ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlStatus {
    /// The vocabulary limit was reached
    Completed,
    /// The frontier ran dry before the limit
    Exhausted,
    /// Stopped from outside (e.g. Ctrl-C) between two words
    Cancelled,
}

/// What the loop should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Visit(String),
    Finished(CrawlStatus),
}

/// What happened when a word was visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Page fetched and parsed
    Fetched {
        entries: Vec<Entry>,
        related: Vec<String>,
    },
    /// Fetch or parse failed; nothing to record, nothing to follow
    Failed,
}

/// Frontier, visited set and corpus for one crawl run.
#[derive(Debug, Clone, Default)]
pub struct CrawlState {
    frontier: VecDeque<String>,
    visited: HashSet<String>,
    visit_order: Vec<String>,
    failed: Vec<String>,
    corpus: Corpus,
}

impl CrawlState {
    /// Fresh state with only the seed word queued.
    pub fn seeded(seed: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.frontier.push_back(seed.into());
        state
    }

    // Decides what to do next
    //
    // 1. Frontier empty            -> Finished(Exhausted)
    // 2. visited >= limit          -> Finished(Completed)
    // 3. Pop the oldest word; if it was already visited, drop it and go
    //    back to 1 (this doesn't use up budget)
    // 4. Otherwise                 -> Visit(word)
    pub fn next_step(mut self, vocabulary_limit: usize) -> (Self, Step) {
        loop {
            if self.frontier.is_empty() {
                return (self, Step::Finished(CrawlStatus::Exhausted));
            }
            if self.visited.len() >= vocabulary_limit {
                return (self, Step::Finished(CrawlStatus::Completed));
            }

            let Some(word) = self.frontier.pop_front() else {
                return (self, Step::Finished(CrawlStatus::Exhausted));
            };

            if self.visited.contains(&word) {
                debug!(word = %word, "skipping already visited word");
                continue;
            }

            return (self, Step::Visit(word));
        }
    }

    // Records the result of visiting a word
    //
    // The word always joins the visited set (failures count against the
    // budget and are never retried). On success the record is appended and
    // every related word that hasn't been visited is queued.
    pub fn apply(mut self, word: String, outcome: VisitOutcome) -> Self {
        if !self.visited.insert(word.clone()) {
            return self;
        }
        self.visit_order.push(word.clone());

        match outcome {
            VisitOutcome::Fetched { entries, related } => {
                for candidate in related {
                    if !self.visited.contains(&candidate) {
                        self.frontier.push_back(candidate);
                    }
                }
                self.corpus.push(WordRecord::new(word, entries));
            }
            VisitOutcome::Failed => {
                self.failed.push(word);
            }
        }

        self
    }

    pub fn frontier(&self) -> &VecDeque<String> {
        &self.frontier
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Splits the state into (visit order, failed words, corpus).
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Corpus) {
        (self.visit_order, self.failed, self.corpus)
    }
}
