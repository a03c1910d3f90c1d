//! Game session: owns the puzzle state and drives the gesture lifecycle.
//!
//! ```text
//! Idle --pointer_down(free cell)--> Dragging --pointer_move--> Dragging
//!   ^                                  |
//!   +------pointer_up / cancel---------+
//! ```
//!
//! Only one pointer can drag at a time. Events from other pointers are dropped
//! until the active gesture ends, so multi-touch never produces two paths.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::GameConfig;
use crate::error::{PuzzleError, StoreError};
use crate::found::{FoundWord, FoundWordStore};
use crate::grid::{Coordinate, Grid};
use crate::matcher::{MatchResult, NoMatchReason, WordMatcher};
use crate::path::{PathChange, PathTracker};
use crate::puzzle::Puzzle;

/// Host pointer identifier (`PointerEvent.pointerId`).
pub type PointerId = i32;

/// Pointer id used by the single-pointer convenience methods.
pub const PRIMARY_POINTER: PointerId = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging { pointer: PointerId },
}

/// Render status of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CellState {
    Free,
    /// Part of the current drag, at this index along the path.
    Selected(usize),
    /// Locked by the found word with this ordinal.
    Found(usize),
}

/// Read-only view handed to the presentation layer after each mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub theme: String,
    pub current_path: Vec<Coordinate>,
    pub selected_letters: String,
    pub found_words: Vec<String>,
    pub found_word_paths: Vec<FoundWord>,
    pub found: usize,
    pub total: usize,
    pub complete: bool,
}

/// One line of the word list. Unfound words are masked to their length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordListEntry {
    pub length: usize,
    pub found: bool,
    pub display: String,
}

#[derive(Debug)]
pub struct GameSession {
    theme: String,
    grid: Grid,
    theme_words: Vec<String>,
    matcher: WordMatcher,
    path: PathTracker,
    found: FoundWordStore,
    gesture: GestureState,
}

impl GameSession {
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        Self::with_config(puzzle, &GameConfig::default())
    }

    /// Fails when a theme word is shorter than `config.min_word_length`, since
    /// the matcher would never accept it and the puzzle could not be finished.
    pub fn with_config(puzzle: Puzzle, config: &GameConfig) -> Result<Self, PuzzleError> {
        let theme = puzzle.theme().to_string();
        let (grid, theme_words) = puzzle.into_parts();
        if let Some(word) = theme_words.iter().find(|w| w.len() < config.min_word_length) {
            return Err(PuzzleError::WordTooShort {
                word: word.clone(),
                min: config.min_word_length,
            });
        }
        info!(
            theme = %theme,
            rows = grid.rows(),
            cols = grid.cols(),
            words = theme_words.len(),
            "session started"
        );
        Ok(Self {
            theme,
            grid,
            theme_words,
            matcher: WordMatcher::new(config.min_word_length),
            path: PathTracker::new(),
            found: FoundWordStore::new(),
            gesture: GestureState::Idle,
        })
    }

    // --- Gesture lifecycle ---------------------------------------------------

    pub fn pointer_down(&mut self, cell: Coordinate) -> bool {
        self.pointer_down_from(PRIMARY_POINTER, cell)
    }

    pub fn pointer_move(&mut self, cell: Coordinate) -> PathChange {
        self.pointer_move_from(PRIMARY_POINTER, cell)
    }

    pub fn pointer_up(&mut self) -> Option<MatchResult> {
        self.pointer_up_from(PRIMARY_POINTER)
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer_cancel_from(PRIMARY_POINTER)
    }

    /// Press on `cell`. Returns true if a drag started.
    ///
    /// A second press from the pointer that is already dragging (its release
    /// was lost) abandons the old path first.
    pub fn pointer_down_from(&mut self, pointer: PointerId, cell: Coordinate) -> bool {
        match self.gesture {
            GestureState::Dragging { pointer: active } if active != pointer => {
                debug!(pointer, active, "ignoring press from second pointer");
                return false;
            }
            GestureState::Dragging { .. } => {
                debug!(pointer, "press while dragging, discarding stale path");
                self.end_gesture();
            }
            GestureState::Idle => {}
        }
        if !self.in_bounds(cell) {
            return false;
        }
        match self.path.start(cell, &self.grid, &self.found) {
            Ok(()) => {
                self.gesture = GestureState::Dragging { pointer };
                debug!(%cell, letters = self.path.letters(), "drag started");
                true
            }
            Err(e) => {
                debug!(%e, "drag not started");
                false
            }
        }
    }

    pub fn pointer_move_from(&mut self, pointer: PointerId, cell: Coordinate) -> PathChange {
        if self.gesture != (GestureState::Dragging { pointer }) || !self.in_bounds(cell) {
            return PathChange::Ignored;
        }
        let change = self.path.extend_or_truncate(cell, &self.grid, &self.found);
        if change != PathChange::Ignored {
            debug!(%cell, ?change, letters = self.path.letters(), "path updated");
        }
        change
    }

    /// Release: evaluate the selection, commit on a match, always return to Idle.
    ///
    /// None when `pointer` was not the one dragging.
    pub fn pointer_up_from(&mut self, pointer: PointerId) -> Option<MatchResult> {
        if self.gesture != (GestureState::Dragging { pointer }) {
            return None;
        }
        let result = self
            .matcher
            .evaluate(self.path.letters(), &self.theme_words, &self.found);
        let result = match result {
            MatchResult::Match { word } => self.commit(word),
            no_match => {
                debug!(letters = self.path.letters(), ?no_match, "selection released");
                no_match
            }
        };
        self.end_gesture();
        Some(result)
    }

    /// Abort the active gesture without evaluating it.
    pub fn pointer_cancel_from(&mut self, pointer: PointerId) {
        if self.gesture == (GestureState::Dragging { pointer }) {
            debug!(pointer, "gesture cancelled");
            self.end_gesture();
        }
    }

    fn commit(&mut self, word: String) -> MatchResult {
        match self.found.commit(&word, self.path.cells()) {
            Ok(ordinal) => {
                info!(word = %word, ordinal, "word found");
                if self.is_complete() {
                    info!(theme = %self.theme, "all theme words found");
                }
                MatchResult::Match { word }
            }
            Err(StoreError::DuplicateWord(w)) => {
                error!(word = %w, "matcher passed an already found word; commit skipped");
                MatchResult::NoMatch(NoMatchReason::AlreadyFound)
            }
        }
    }

    fn end_gesture(&mut self) {
        self.path.reset();
        self.gesture = GestureState::Idle;
    }

    fn in_bounds(&self, cell: Coordinate) -> bool {
        if self.grid.contains(cell) {
            return true;
        }
        warn!(
            %cell,
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "ignoring out-of-bounds cell"
        );
        false
    }

    // --- Read projections ----------------------------------------------------

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn theme_words(&self) -> &[String] {
        &self.theme_words
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn current_path(&self) -> &[Coordinate] {
        self.path.cells()
    }

    pub fn selected_letters(&self) -> &str {
        self.path.letters()
    }

    pub fn found(&self) -> &FoundWordStore {
        &self.found
    }

    pub fn is_locked(&self, cell: Coordinate) -> bool {
        self.found.is_locked(cell)
    }

    pub fn is_complete(&self) -> bool {
        self.found.is_complete(&self.theme_words)
    }

    /// (found, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.found.len(), self.theme_words.len())
    }

    pub fn cell_state(&self, cell: Coordinate) -> CellState {
        if let Some(idx) = self.path.position_of(cell) {
            return CellState::Selected(idx);
        }
        match self.found.ordinal_of_cell(cell) {
            Some(ordinal) => CellState::Found(ordinal),
            None => CellState::Free,
        }
    }

    pub fn word_list(&self) -> Vec<WordListEntry> {
        self.theme_words
            .iter()
            .map(|w| {
                let found = self.found.contains(w);
                WordListEntry {
                    length: w.len(),
                    found,
                    display: if found { w.clone() } else { "?".repeat(w.len()) },
                }
            })
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        let (found, total) = self.progress();
        Snapshot {
            theme: self.theme.clone(),
            current_path: self.path.cells().to_vec(),
            selected_letters: self.path.letters().to_string(),
            found_words: self.found.iter().map(|f| f.word.clone()).collect(),
            found_word_paths: self.found.words().to_vec(),
            found,
            total,
            complete: self.is_complete(),
        }
    }
}
