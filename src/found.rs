//! Session-lifetime record of confirmed words and the cells they lock.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::StoreError;
use crate::grid::Coordinate;

/// A confirmed word and the exact path that spelled it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Coordinate>,
}

/// Insertion-ordered found words. The locked-cell set is kept in step with
/// `words` so lookups during a drag never rescan every path.
#[derive(Clone, Debug, Default)]
pub struct FoundWordStore {
    words: Vec<FoundWord>,
    locked: HashSet<Coordinate>,
}

impl FoundWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` as found via `path`. Returns the word's ordinal.
    pub fn commit(&mut self, word: &str, path: &[Coordinate]) -> Result<usize, StoreError> {
        if self.contains(word) {
            return Err(StoreError::DuplicateWord(word.to_string()));
        }
        self.locked.extend(path.iter().copied());
        self.words.push(FoundWord {
            word: word.to_string(),
            path: path.to_vec(),
        });
        Ok(self.words.len() - 1)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|f| f.word == word)
    }

    pub fn is_locked(&self, cell: Coordinate) -> bool {
        self.locked.contains(&cell)
    }

    /// Position of the found word whose path covers `cell`.
    pub fn ordinal_of_cell(&self, cell: Coordinate) -> Option<usize> {
        if !self.is_locked(cell) {
            return None;
        }
        self.words.iter().position(|f| f.path.contains(&cell))
    }

    pub fn ordinal_of_word(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|f| f.word == word)
    }

    pub fn is_complete<S: AsRef<str>>(&self, theme_words: &[S]) -> bool {
        self.words.len() == theme_words.len()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoundWord> {
        self.words.iter()
    }

    pub fn words(&self) -> &[FoundWord] {
        &self.words
    }
}
