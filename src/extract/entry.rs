// src/extract/entry.rs
// =============================================================================
// Extracts dictionary entries from a page.
//
// The dictionary marks each sense/lemma block with a set of CSS classes:
//
//   div.pr.entry-body__el          one entry block (noun, verb, ...)
//     span.hw.dhw                  headword
//     span.pos.dpos                part of speech
//     span.uk.dpron-i > span.ipa   UK pronunciation
//     span.us.dpron-i > span.ipa   US pronunciation
//     div.def.ddef_d.db            a definition (many)
//     div.examp.dexamp             an example sentence (many)
//
// Every block found becomes an Entry, even if none of the inner pieces are
// there. Missing pieces are None (headword, part of speech), "" (pronunciation)
// or an empty Vec (definitions, examples).
// =============================================================================

use crate::extract::{normalize, Page};
use crate::model::{Entry, PronunciationPair};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

// Selectors are parsed once on first use; they are constants so parsing can't fail
static ENTRY_BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.pr.entry-body__el"));
static HEADWORD: Lazy<Selector> = Lazy::new(|| selector("span.hw.dhw"));
static PART_OF_SPEECH: Lazy<Selector> = Lazy::new(|| selector("span.pos.dpos"));
static UK_PRONUNCIATION: Lazy<Selector> = Lazy::new(|| selector("span.uk.dpron-i"));
static US_PRONUNCIATION: Lazy<Selector> = Lazy::new(|| selector("span.us.dpron-i"));
static PHONETIC: Lazy<Selector> = Lazy::new(|| selector("span.ipa"));
static DEFINITION: Lazy<Selector> = Lazy::new(|| selector("div.def.ddef_d.db"));
static EXAMPLE: Lazy<Selector> = Lazy::new(|| selector("div.examp.dexamp"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("hardcoded selector is valid")
}

// Extracts one Entry per top-level entry block, in document order
//
// Parameters:
//   page: the parsed dictionary page
//
// Returns: Vec<Entry> (empty if the page has no entry blocks, e.g. a
//          "word not found" page)
pub fn extract_entries(page: &Page) -> Vec<Entry> {
    page.document()
        .select(&ENTRY_BLOCK)
        .filter(|block| is_top_level(block))
        .map(|block| extract_entry(&block))
        .collect()
}

// A block nested inside another entry block belongs to its parent
fn is_top_level(block: &ElementRef) -> bool {
    !block
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ENTRY_BLOCK.matches(&ancestor))
}

fn extract_entry(block: &ElementRef) -> Entry {
    Entry {
        headword: first_text(block, &HEADWORD),
        part_of_speech: first_text(block, &PART_OF_SPEECH),
        pronunciation: extract_pronunciation(block),
        definitions: all_text(block, &DEFINITION),
        examples: all_text(block, &EXAMPLE),
    }
}

// Finds the UK and US phonetic spellings inside one entry block
//
// Each side is looked up on its own: a page can have UK without US.
// A missing region block, or one without an ipa span, gives "".
fn extract_pronunciation(block: &ElementRef) -> PronunciationPair {
    PronunciationPair {
        uk: regional_phonetic(block, &UK_PRONUNCIATION),
        us: regional_phonetic(block, &US_PRONUNCIATION),
    }
}

fn regional_phonetic(block: &ElementRef, region: &Selector) -> String {
    let phonetic = block
        .select(region)
        .next()
        .and_then(|found| found.select(&PHONETIC).next())
        .map(element_text);

    normalize(phonetic.as_deref())
}

// Normalized text of the first match, or None if nothing matches
fn first_text(block: &ElementRef, selector: &Selector) -> Option<String> {
    block
        .select(selector)
        .next()
        .map(|element| normalize(Some(&element_text(element))))
}

// Normalized text of every match, in document order
fn all_text(block: &ElementRef, selector: &Selector) -> Vec<String> {
    block
        .select(selector)
        .map(|element| normalize(Some(&element_text(element))))
        .collect()
}

// Concatenates all text nodes under an element (like innerText without layout)
fn element_text(element: ElementRef) -> String {
    element.text().collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is Lazy?
//    - once_cell::sync::Lazy runs its closure the first time it's used
//    - After that, every access returns the same value
//    - Perfect for selectors: parse once, use for every page
//
// 2. Why does ENTRY_BLOCK.matches(&ancestor) need ElementRef::wrap?
//    - ancestors() walks every node (text, comments, elements...)
//    - ElementRef::wrap returns Some only for element nodes
//    - filter_map keeps the elements and drops the rest
//
// 3. Option<&str> and as_deref()
//    - phonetic is Option<String>; normalize wants Option<&str>
//    - as_deref() borrows the String inside without cloning it
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const THESAURUS_PAGE: &str = r#"
        <html><body>
          <div class="pr entry-body__el">
            <span class="hw dhw">thesaurus</span>
            <span class="pos dpos">noun</span>
            <span class="uk dpron-i"><span class="region">uk</span>
              <span class="ipa"> θɪˈsɔː.rəs </span></span>
            <span class="us dpron-i"><span class="ipa">θɪˈsɔːr.əs</span></span>
            <div class="def ddef_d db">a type of
              <a href="/dictionary/english/dictionary">dictionary</a>  in which words
              with similar meanings are arranged in groups</div>
            <div class="examp dexamp">Look it up in a   thesaurus.</div>
            <div class="examp dexamp">An online thesaurus.</div>
          </div>
          <div class="pr entry-body__el">
            <span class="pos dpos">verb</span>
            <span class="uk dpron-i"><span class="ipa">θɪˈsɔː</span></span>
            <div class="def ddef_d db">to look something up</div>
          </div>
        </body></html>
    "#;

    fn entries_for(html: &str) -> Vec<Entry> {
        extract_entries(&Page::parse(html).unwrap())
    }

    #[test]
    fn test_extracts_every_entry_block() {
        let entries = entries_for(THESAURUS_PAGE);
        assert_eq!(entries.len(), 2);

        let noun = &entries[0];
        assert_eq!(noun.headword.as_deref(), Some("thesaurus"));
        assert_eq!(noun.part_of_speech.as_deref(), Some("noun"));
        assert_eq!(noun.pronunciation.uk, "θɪˈsɔː.rəs");
        assert_eq!(noun.pronunciation.us, "θɪˈsɔːr.əs");
        assert_eq!(
            noun.definitions,
            vec!["a type of dictionary in which words with similar meanings are arranged in groups"]
        );
        assert_eq!(
            noun.examples,
            vec!["Look it up in a thesaurus.", "An online thesaurus."]
        );
    }

    #[test]
    fn test_missing_pieces_are_none_or_empty() {
        let entries = entries_for(THESAURUS_PAGE);
        let verb = &entries[1];
        assert_eq!(verb.headword, None);
        assert_eq!(verb.part_of_speech.as_deref(), Some("verb"));
        assert_eq!(verb.pronunciation.uk, "θɪˈsɔː");
        assert_eq!(verb.pronunciation.us, "");
        assert!(verb.examples.is_empty());
    }

    #[test]
    fn test_bare_entry_block_is_kept() {
        let entries = entries_for(r#"<div class="pr entry-body__el"><p>nothing here</p></div>"#);
        assert_eq!(entries, vec![Entry::default()]);
    }

    #[test]
    fn test_region_without_ipa_is_empty() {
        let html = r#"
            <div class="pr entry-body__el">
              <span class="uk dpron-i"><span class="region">uk</span></span>
              <span class="us dpron-i"><span class="ipa">kæt</span></span>
            </div>"#;
        let entries = entries_for(html);
        assert_eq!(entries[0].pronunciation.uk, "");
        assert_eq!(entries[0].pronunciation.us, "kæt");
    }

    #[test]
    fn test_page_without_entries() {
        let entries = entries_for("<html><body><h1>Search results</h1></body></html>");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_nested_block_belongs_to_parent() {
        let html = r#"
            <div class="pr entry-body__el">
              <span class="hw dhw">outer</span>
              <div class="pr entry-body__el"><span class="hw dhw">inner</span></div>
            </div>"#;
        let entries = entries_for(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].headword.as_deref(), Some("outer"));
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let page = Page::parse(THESAURUS_PAGE).unwrap();
        assert_eq!(extract_entries(&page), extract_entries(&page));
        assert_eq!(extract_entries(&page), entries_for(THESAURUS_PAGE));
    }
}
