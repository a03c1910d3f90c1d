//! Error types for the puzzle core.
//!
//! Most negative outcomes of a gesture are not errors at all (see
//! [`crate::matcher::NoMatchReason`]). The types here cover the few cases that
//! are: selecting a locked or out-of-grid cell, an internal duplicate commit,
//! and malformed puzzle or config data coming from outside.

use thiserror::Error;

use crate::grid::Coordinate;

/// Rejected attempt to start a selection on a cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The cell belongs to an already found word.
    #[error("cell {0} is locked by a found word")]
    LockedCell(Coordinate),

    /// The cell lies outside the grid.
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        cell: Coordinate,
        rows: usize,
        cols: usize,
    },
}

/// Failure to record a confirmed word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The word was already committed this session.
    #[error("word {0:?} has already been found")]
    DuplicateWord(String),
}

/// Malformed puzzle data.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds {letter:?}, expected a single letter A-Z")]
    InvalidLetter {
        row: usize,
        col: usize,
        letter: String,
    },

    #[error("grid is {rows}x{cols}, larger than the configured maximum {max_rows}x{max_cols}")]
    TooLarge {
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
    },

    #[error("puzzle has no theme words")]
    NoThemeWords,

    #[error("theme word {word:?} is shorter than the minimum length {min}")]
    WordTooShort { word: String, min: usize },

    #[error("theme word {word:?} must consist of letters A-Z only")]
    InvalidWord { word: String },

    #[error("theme word {0:?} appears more than once")]
    DuplicateThemeWord(String),

    #[error("invalid puzzle date {date:?}: {source}")]
    InvalidDate {
        date: String,
        source: chrono::ParseError,
    },

    #[error("puzzle catalogue is empty")]
    EmptyCatalogue,

    #[error("malformed puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed or out-of-range configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("min_word_length must be at least 1")]
    ZeroWordLength,

    #[error("max_rows and max_cols must be at least 1")]
    ZeroDimension,

    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_error_messages_name_the_cell() {
        let locked = SelectionError::LockedCell(Coordinate::new(2, 3));
        assert_eq!(locked.to_string(), "cell (2, 3) is locked by a found word");
        let oob = SelectionError::OutOfBounds {
            cell: Coordinate::new(9, 0),
            rows: 8,
            cols: 6,
        };
        assert_eq!(oob.to_string(), "cell (9, 0) is outside the 8x6 grid");
    }

    #[test]
    fn json_errors_convert_into_puzzle_and_config_errors() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PuzzleError = bad.into();
        assert!(matches!(err, PuzzleError::Json(_)));
        let bad = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: ConfigError = bad.into();
        assert!(err.to_string().starts_with("malformed config JSON"));
    }
}
