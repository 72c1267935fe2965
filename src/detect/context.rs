//! Contextual disambiguation of pattern matches.
//!
//! Bare date-shaped strings are everywhere (prices, invoice dates, version
//! numbers), so a `dob` match is only kept when a birth-related keyword
//! appears close by. Every other label passes through unchanged.

use super::{Candidate, PiiLabel};

/// Number of characters inspected on each side of a match.
const CONTEXT_WINDOW: usize = 20;

/// Keywords that confirm a date is a date of birth. Compared lowercase.
const DOB_KEYWORDS: &[&str] = &["birth", "born", "dob", "date of birth"];

/// Per-label acceptance rules applied after pattern matching.
#[derive(Debug, Clone)]
pub struct ContextFilter {
    window: usize,
    keywords: &'static [&'static str],
}

impl Default for ContextFilter {
    fn default() -> Self {
        Self {
            window: CONTEXT_WINDOW,
            keywords: DOB_KEYWORDS,
        }
    }
}

impl ContextFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `candidate` survives disambiguation against the
    /// full page text it was matched in.
    pub fn accept(&self, candidate: &Candidate, text: &str) -> bool {
        match candidate.label {
            PiiLabel::Dob => self.has_dob_context(candidate, text),
            _ => true,
        }
    }

    /// Looks for a keyword in a window of `self.window` characters before
    /// the match start and after the match end. The window clamps at
    /// string bounds: a match at offset 0 has an empty left window, not a
    /// padded one.
    fn has_dob_context(&self, candidate: &Candidate, text: &str) -> bool {
        // Window extents are measured in characters, not bytes, so
        // multibyte text gets the same reach as ASCII.
        let start = text[..candidate.start]
            .char_indices()
            .rev()
            .take(self.window)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(candidate.start);
        let end = text[candidate.end..]
            .char_indices()
            .take(self.window)
            .last()
            .map(|(i, c)| candidate.end + i + c.len_utf8())
            .unwrap_or(candidate.end);
        let context = text[start..end].to_lowercase();
        self.keywords.iter().any(|kw| context.contains(kw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::PatternSet;

    fn dob_candidate(text: &str) -> Candidate {
        PatternSet::builtin()
            .find_candidates(text, 0)
            .into_iter()
            .find(|c| c.label == PiiLabel::Dob)
            .expect("text contains a dob-shaped match")
    }

    #[test]
    fn test_dob_accepted_with_keyword_before() {
        let text = "Born 24th Jan 1982 in London";
        let filter = ContextFilter::new();
        assert!(filter.accept(&dob_candidate(text), text));
    }

    #[test]
    fn test_dob_accepted_with_keyword_after() {
        let text = "24th Jan 1982, date of birth";
        let filter = ContextFilter::new();
        assert!(filter.accept(&dob_candidate(text), text));
    }

    #[test]
    fn test_dob_rejected_without_keyword() {
        let text = "Invoice date 24th Jan 1982";
        let filter = ContextFilter::new();
        assert!(!filter.accept(&dob_candidate(text), text));
    }

    #[test]
    fn test_dob_keyword_outside_window_rejected() {
        // "birth" sits more than 20 characters away from the match.
        let text = "birth certificate register entry number 24th Jan 1982";
        let filter = ContextFilter::new();
        assert!(!filter.accept(&dob_candidate(text), text));
    }

    #[test]
    fn test_match_at_offset_zero_clamps_left_window() {
        let text = "24th Jan 1982 dob on file";
        let candidate = dob_candidate(text);
        assert_eq!(candidate.start, 0);
        let filter = ContextFilter::new();
        assert!(filter.accept(&candidate, text));
    }

    #[test]
    fn test_non_dob_labels_pass_unconditionally() {
        let text = "nothing relevant around 555-123-4567 here";
        let filter = ContextFilter::new();
        for candidate in PatternSet::builtin().find_candidates(text, 0) {
            if candidate.label != PiiLabel::Dob {
                assert!(filter.accept(&candidate, text));
            }
        }
    }

    #[test]
    fn test_multibyte_text_does_not_panic() {
        let text = "Réservé données näissance born 24th Jan 1982";
        let candidate = dob_candidate(text);
        let filter = ContextFilter::new();
        assert!(filter.accept(&candidate, text));
    }

    #[test]
    fn test_window_measured_in_characters_not_bytes() {
        // "born" sits 18 characters (30 bytes) before the match; a
        // byte-measured window would miss it.
        let text = format!("born {} 1-1-2000", "é".repeat(12));
        let candidate = dob_candidate(&text);
        let filter = ContextFilter::new();
        assert!(filter.accept(&candidate, &text));
    }

    #[test]
    fn test_keyword_just_past_character_window_rejected() {
        // Keyword begins 21 characters after the match end.
        let text = "24th Jan 1982 is the date of birth";
        let filter = ContextFilter::new();
        assert!(!filter.accept(&dob_candidate(text), text));
    }
}
