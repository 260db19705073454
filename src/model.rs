// src/model.rs
// =============================================================================
// The data we extract from dictionary pages.
//
// Shape of one crawled word, as written to JSON:
//
//   {
//     "word": "thesaurus",
//     "entries": [
//       {
//         "word": "thesaurus",
//         "part_of_speech": "noun",
//         "pronunciation": { "uk": "θɪˈsɔː.rəs", "us": "θɪˈsɔːr.əs" },
//         "definitions": ["a type of dictionary ..."],
//         "examples": ["..."]
//       }
//     ]
//   }
//
// Optional vs empty:
// - headword and part_of_speech are Option: None means "not on the page",
//   and the key is left out of the JSON entirely
// - pronunciation, definitions and examples are always present, and are
//   simply empty when the page had nothing for them
// =============================================================================

use serde::{Deserialize, Serialize};

/// Everything extracted from one word's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// The word we asked for (not necessarily the headword shown on the page)
    pub word: String,
    /// One entry per sense/lemma block, in page order
    pub entries: Vec<Entry>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            word: word.into(),
            entries,
        }
    }
}

/// One sense/lemma block on a page (e.g. "thesaurus" the noun).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Heading text of the block. Serialized as "word" like the scraper's output files.
    #[serde(rename = "word", default, skip_serializing_if = "Option::is_none")]
    pub headword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    pub pronunciation: PronunciationPair,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
}

/// UK and US phonetic spellings. Missing sides are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationPair {
    pub uk: String,
    pub us: String,
}

/// All records collected by one crawl run, in visit order.
pub type Corpus = Vec<WordRecord>;
