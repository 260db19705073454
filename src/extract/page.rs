// src/extract/page.rs
// =============================================================================
// A parsed dictionary page.
//
// scraper (built on html5ever) is very forgiving: it will happily build a
// tree out of almost anything. The one thing we refuse is an empty body,
// which usually means the server answered but sent nothing useful.
//
// Note: scraper's Html is not Send, so a Page should be used and dropped
// without holding it across an .await.
// =============================================================================

use crate::error::ParseError;
use scraper::Html;

pub struct Page {
    document: Html,
}

impl Page {
    // Parses raw markup into a Page
    //
    // Returns: Err(ParseError::EmptyDocument) when there is no markup at all
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }

        Ok(Self {
            document: Html::parse_document(raw),
        })
    }

    pub(crate) fn document(&self) -> &Html {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_markup_is_a_parse_error() {
        assert_eq!(Page::parse("").err(), Some(ParseError::EmptyDocument));
        assert_eq!(Page::parse("  \n ").err(), Some(ParseError::EmptyDocument));
    }

    #[test]
    fn test_fragment_still_parses() {
        assert!(Page::parse("<p>not a full page").is_ok());
    }
}
