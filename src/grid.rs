//! Letter grid and cell coordinates.
//!
//! The grid is stored flat, row-major, the same way level tiles are laid out
//! in a board descriptor. Adjacency is 8-directional (Chebyshev distance 1).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::PuzzleError;

/// A 0-indexed cell position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// True iff `a` and `b` are distinct and touch horizontally, vertically or diagonally.
pub fn is_adjacent(a: Coordinate, b: Coordinate) -> bool {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    dr <= 1 && dc <= 1 && (dr + dc) > 0
}

/// Immutable R×C matrix of uppercase letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>, // length = rows * cols
}

impl Grid {
    /// Build a grid from rows of letters, validating shape and content.
    ///
    /// Lowercase ASCII letters are accepted and stored uppercase.
    pub fn new<R, S>(rows: R, config: &GameConfig) -> Result<Self, PuzzleError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;
        for (r, row) in rows.into_iter().enumerate() {
            let mut count = 0;
            for (c, ch) in row.as_ref().chars().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(PuzzleError::InvalidLetter {
                        row: r,
                        col: c,
                        letter: ch.to_string(),
                    });
                }
                cells.push(ch.to_ascii_uppercase());
                count += 1;
            }
            match width {
                None => width = Some(count),
                Some(expected) if expected != count => {
                    return Err(PuzzleError::RaggedRow {
                        row: r,
                        expected,
                        found: count,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        let cols = width.unwrap_or(0);
        if height == 0 || cols == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        if height > config.max_rows || cols > config.max_cols {
            return Err(PuzzleError::TooLarge {
                rows: height,
                cols,
                max_rows: config.max_rows,
                max_cols: config.max_cols,
            });
        }
        Ok(Self {
            rows: height,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Letter at `cell`, or None when outside the grid.
    pub fn letter(&self, cell: Coordinate) -> Option<char> {
        if !self.contains(cell) {
            return None;
        }
        self.cells.get(cell.row * self.cols + cell.col).copied()
    }

    /// Concatenated letters along `path`. Cells outside the grid are skipped.
    pub fn spell(&self, path: &[Coordinate]) -> String {
        path.iter().filter_map(|&c| self.letter(c)).collect()
    }

    /// Rows as strings, top to bottom.
    pub fn row_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect())
            .collect()
    }
}
