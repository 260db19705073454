// src/emit/mod.rs
// =============================================================================
// This module writes crawl results to disk as JSON.
// =============================================================================

mod json;

pub use json::{emit_corpus, emit_record, output_path, EmitOutcome};
