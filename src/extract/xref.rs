// src/extract/xref.rs
// =============================================================================
// Finds links from one word's page to other word pages.
//
// Rule: an <a href> is a cross-reference when, resolved against the base
// URL, it
// 1. has the same scheme and host as the base URL
// 2. has a path of the form <base path><word> (exactly one more segment)
//
// Query strings and #fragments are ignored, and the word is percent-decoded:
//   base = https://dictionary.cambridge.org/dictionary/english/
//   href = /dictionary/english/feline?q=x   -> "feline"
//   href = /dictionary/english/ice%20cream  -> "ice cream"
//   href = /dictionary/english/             -> (skipped, no word)
//   href = /thesaurus/feline                -> (skipped, other section)
//   href = https://other.com/dictionary/english/feline -> (skipped, other host)
//
// Duplicates are kept on purpose; the crawl engine decides what's new.
// =============================================================================

use crate::extract::Page;
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use scraper::Selector;
use url::Url;

static LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("hardcoded selector is valid"));

// Extracts related words from every qualifying link, in document order
//
// Parameters:
//   page: the parsed dictionary page
//   base: directory-style URL word pages live under (ends with '/')
//
// Returns: Vec<String> of words, possibly with repeats; never fails
pub fn extract_related_words(page: &Page, base: &Url) -> Vec<String> {
    page.document()
        .select(&LINK)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| word_from_href(base, href))
        .collect()
}

fn word_from_href(base: &Url, href: &str) -> Option<String> {
    // Skip in-page anchors and special protocols before resolving
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    let target = base.join(href).ok()?;

    if target.scheme() != base.scheme() || target.host_str() != base.host_str() {
        return None;
    }
    if target.port_or_known_default() != base.port_or_known_default() {
        return None;
    }

    let segment = target.path().strip_prefix(base.path())?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }

    let word = percent_decode_str(segment).decode_utf8().ok()?;
    let word = word.trim();
    if word.is_empty() {
        return None;
    }

    Some(word.to_string())
}
