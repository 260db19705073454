// src/extract/mod.rs
// =============================================================================
// This module turns dictionary pages into data.
//
// Submodules:
// - text: whitespace normalization applied to every scraped string
// - page: parses raw HTML into a queryable Page
// - entry: pulls headword, part of speech, pronunciation, definitions and
//          examples out of each entry block
// - xref: finds links to other word pages (what the crawler follows next)
//
// Both extractors take the same &Page, so one fetch feeds both.
// =============================================================================

mod entry;
mod page;
mod text;
mod xref;

pub use entry::extract_entries;
pub use page::Page;
pub use text::normalize;
pub use xref::extract_related_words;
