//! Decides whether a finished selection is a new theme word.

use serde::Serialize;

use crate::found::FoundWordStore;

/// Why a selection did not score. None of these are errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NoMatchReason {
    TooShort,
    NotThemeWord,
    AlreadyFound,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    Match { word: String },
    NoMatch(NoMatchReason),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match { .. })
    }
}

/// Exact-match evaluation against the theme words. Letters and words are both
/// held uppercase, so no normalisation happens here.
#[derive(Clone, Copy, Debug)]
pub struct WordMatcher {
    min_word_length: usize,
}

impl WordMatcher {
    pub fn new(min_word_length: usize) -> Self {
        Self { min_word_length }
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub fn evaluate<S: AsRef<str>>(
        &self,
        selected: &str,
        theme_words: &[S],
        found: &FoundWordStore,
    ) -> MatchResult {
        if selected.chars().count() < self.min_word_length {
            return MatchResult::NoMatch(NoMatchReason::TooShort);
        }
        if !theme_words.iter().any(|w| w.as_ref() == selected) {
            return MatchResult::NoMatch(NoMatchReason::NotThemeWord);
        }
        if found.contains(selected) {
            return MatchResult::NoMatch(NoMatchReason::AlreadyFound);
        }
        MatchResult::Match {
            word: selected.to_string(),
        }
    }
}

impl Default for WordMatcher {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MIN_WORD_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coordinate;

    const THEME: [&str; 3] = ["RUBY", "GEM", "OX"];

    #[test]
    fn test_theme_word_matches() {
        let m = WordMatcher::default();
        let r = m.evaluate("RUBY", &THEME, &FoundWordStore::new());
        assert_eq!(r, MatchResult::Match { word: "RUBY".into() });
        assert!(r.is_match());
    }

    #[test]
    fn test_short_selection_never_matches() {
        // "OX" is a theme word but below the minimum length.
        let m = WordMatcher::default();
        let found = FoundWordStore::new();
        assert_eq!(
            m.evaluate("OX", &THEME, &found),
            MatchResult::NoMatch(NoMatchReason::TooShort)
        );
        assert_eq!(
            m.evaluate("", &THEME, &found),
            MatchResult::NoMatch(NoMatchReason::TooShort)
        );
    }

    #[test]
    fn test_unknown_and_already_found() {
        let m = WordMatcher::default();
        let mut found = FoundWordStore::new();
        assert_eq!(
            m.evaluate("RUB", &THEME, &found),
            MatchResult::NoMatch(NoMatchReason::NotThemeWord)
        );
        found
            .commit("GEM", &[Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)])
            .unwrap();
        assert_eq!(
            m.evaluate("GEM", &THEME, &found),
            MatchResult::NoMatch(NoMatchReason::AlreadyFound)
        );
    }

    #[test]
    fn test_matching_is_case_exact() {
        let m = WordMatcher::default();
        assert_eq!(
            m.evaluate("ruby", &THEME, &FoundWordStore::new()),
            MatchResult::NoMatch(NoMatchReason::NotThemeWord)
        );
    }

    #[test]
    fn test_configured_minimum_length() {
        let m = WordMatcher::new(2);
        assert!(m.evaluate("OX", &THEME, &FoundWordStore::new()).is_match());
    }
}
