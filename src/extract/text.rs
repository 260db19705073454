// src/extract/text.rs
// =============================================================================
// Text cleanup for scraped fragments.
//
// Dictionary markup nests lots of tags inside definitions, so the raw text
// we get back is full of newlines, tabs and double spaces. normalize() turns
// "  a   type of\n\t dictionary " into "a type of dictionary".
// =============================================================================

// Collapses every whitespace run to one space and trims both ends
//
// Parameters:
//   raw: the text to clean, or None if nothing was found
//
// Returns: the cleaned text ("" for None or all-whitespace input)
pub fn normalize(raw: Option<&str>) -> String {
    match raw {
        Some(text) => text.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some(" \n\t ")), "");
    }

    #[test]
    fn test_collapses_mixed_whitespace() {
        let cleaned = normalize(Some("  a   type of\n\t dictionary \r\n"));
        assert_eq!(cleaned, "a type of dictionary");
    }

    #[test]
    fn test_no_runs_or_edges_left() {
        let inputs = [
            "\u{a0}word\u{a0}\u{a0}with nbsp ",
            "tabs\t\tand\nnewlines\n\n",
            "already clean",
            "   ",
        ];
        for input in inputs {
            let cleaned = normalize(Some(input));
            assert_eq!(cleaned, cleaned.trim());
            let chars: Vec<char> = cleaned.chars().collect();
            assert!(!chars
                .windows(2)
                .any(|pair| pair[0].is_whitespace() && pair[1].is_whitespace()));
        }
    }

    #[test]
    fn test_keeps_non_ascii() {
        assert_eq!(normalize(Some(" /θɪˈsɔː.rəs/ ")), "/θɪˈsɔː.rəs/");
    }
}
