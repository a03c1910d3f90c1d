//! In-progress selection path for a single drag gesture.
//!
//! Invalid moves are ignored rather than reported: pointer input is noisy and
//! fast movement can skip cells, so only `start` can fail.

use crate::error::SelectionError;
use crate::found::FoundWordStore;
use crate::grid::{Coordinate, Grid, is_adjacent};

/// Effect of a move event on the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathChange {
    Extended,
    /// Backtracked onto an earlier cell; the path now ends there.
    Truncated,
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct PathTracker {
    cells: Vec<Coordinate>,
    letters: String, // grid letters along `cells`, one ASCII byte per cell
    dragging: bool,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new path at `cell`, discarding any previous one.
    pub fn start(
        &mut self,
        cell: Coordinate,
        grid: &Grid,
        found: &FoundWordStore,
    ) -> Result<(), SelectionError> {
        let Some(letter) = grid.letter(cell) else {
            return Err(SelectionError::OutOfBounds {
                cell,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        };
        if found.is_locked(cell) {
            return Err(SelectionError::LockedCell(cell));
        }
        self.cells.clear();
        self.letters.clear();
        self.cells.push(cell);
        self.letters.push(letter);
        self.dragging = true;
        Ok(())
    }

    /// Append `cell` if adjacent to the path's end, or cut the path back to it
    /// if already selected. Anything else leaves the path unchanged.
    pub fn extend_or_truncate(
        &mut self,
        cell: Coordinate,
        grid: &Grid,
        found: &FoundWordStore,
    ) -> PathChange {
        if !self.dragging || found.is_locked(cell) {
            return PathChange::Ignored;
        }
        if let Some(idx) = self.cells.iter().position(|&c| c == cell) {
            if idx + 1 == self.cells.len() {
                return PathChange::Ignored;
            }
            self.cells.truncate(idx + 1);
            self.letters.truncate(idx + 1);
            return PathChange::Truncated;
        }
        let Some(&last) = self.cells.last() else {
            return PathChange::Ignored;
        };
        match grid.letter(cell) {
            Some(letter) if is_adjacent(last, cell) => {
                self.cells.push(cell);
                self.letters.push(letter);
                PathChange::Extended
            }
            _ => PathChange::Ignored,
        }
    }

    pub fn reset(&mut self) {
        self.cells.clear();
        self.letters.clear();
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn position_of(&self, cell: Coordinate) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn grid() -> Grid {
        Grid::new(["CATS", "ODEN", "GXYZ", "QRST"], &GameConfig::default()).unwrap()
    }

    fn assert_valid(path: &[Coordinate]) {
        for pair in path.windows(2) {
            assert!(is_adjacent(pair[0], pair[1]), "{:?}", path);
        }
        for (i, a) in path.iter().enumerate() {
            assert!(!path[i + 1..].contains(a), "repeat in {:?}", path);
        }
    }

    #[test]
    fn test_start_sets_single_cell() {
        let g = grid();
        let mut p = PathTracker::new();
        p.start(c(0, 1), &g, &FoundWordStore::new()).unwrap();
        assert!(p.is_dragging());
        assert_eq!(p.cells(), &[c(0, 1)]);
        assert_eq!(p.letters(), "A");
    }

    #[test]
    fn test_start_on_locked_cell_fails_and_keeps_state() {
        let g = grid();
        let mut found = FoundWordStore::new();
        found.commit("CAT", &[c(0, 0), c(0, 1), c(0, 2)]).unwrap();
        let mut p = PathTracker::new();
        assert_eq!(
            p.start(c(0, 1), &g, &found),
            Err(SelectionError::LockedCell(c(0, 1)))
        );
        assert!(!p.is_dragging());
        assert!(p.cells().is_empty());
    }

    #[test]
    fn test_start_outside_grid_fails() {
        let g = grid();
        let mut p = PathTracker::new();
        let err = p.start(c(4, 0), &g, &FoundWordStore::new()).unwrap_err();
        assert!(matches!(err, SelectionError::OutOfBounds { rows: 4, cols: 4, .. }));
    }

    #[test]
    fn test_extend_appends_adjacent_cells() {
        let g = grid();
        let found = FoundWordStore::new();
        let mut p = PathTracker::new();
        p.start(c(0, 0), &g, &found).unwrap();
        assert_eq!(p.extend_or_truncate(c(1, 1), &g, &found), PathChange::Extended);
        assert_eq!(p.extend_or_truncate(c(0, 2), &g, &found), PathChange::Extended);
        assert_eq!(p.letters(), "CDT");
        assert_valid(p.cells());
    }

    #[test]
    fn test_backtrack_truncates_to_revisited_cell() {
        let g = grid();
        let found = FoundWordStore::new();
        let mut p = PathTracker::new();
        p.start(c(0, 0), &g, &found).unwrap();
        p.extend_or_truncate(c(0, 1), &g, &found);
        p.extend_or_truncate(c(1, 1), &g, &found);
        assert_eq!(p.extend_or_truncate(c(0, 1), &g, &found), PathChange::Truncated);
        assert_eq!(p.cells(), &[c(0, 0), c(0, 1)]);
        assert_eq!(p.letters(), "CA");
    }

    #[test]
    fn test_reentering_last_cell_is_ignored() {
        let g = grid();
        let found = FoundWordStore::new();
        let mut p = PathTracker::new();
        p.start(c(0, 0), &g, &found).unwrap();
        p.extend_or_truncate(c(0, 1), &g, &found);
        assert_eq!(p.extend_or_truncate(c(0, 1), &g, &found), PathChange::Ignored);
        assert_eq!(p.cells().len(), 2);
    }

    #[test]
    fn test_non_adjacent_jump_is_ignored() {
        let g = grid();
        let found = FoundWordStore::new();
        let mut p = PathTracker::new();
        p.start(c(0, 0), &g, &found).unwrap();
        assert_eq!(p.extend_or_truncate(c(3, 3), &g, &found), PathChange::Ignored);
        assert_eq!(p.cells(), &[c(0, 0)]);
    }

    #[test]
    fn test_extend_before_start_or_onto_locked_is_ignored() {
        let g = grid();
        let mut found = FoundWordStore::new();
        let mut p = PathTracker::new();
        assert_eq!(p.extend_or_truncate(c(0, 0), &g, &found), PathChange::Ignored);
        found.commit("ODE", &[c(1, 0), c(1, 1), c(1, 2)]).unwrap();
        p.start(c(0, 0), &g, &found).unwrap();
        assert_eq!(p.extend_or_truncate(c(1, 0), &g, &found), PathChange::Ignored);
        assert_eq!(p.cells(), &[c(0, 0)]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let g = grid();
        let found = FoundWordStore::new();
        let mut p = PathTracker::new();
        p.start(c(0, 0), &g, &found).unwrap();
        p.extend_or_truncate(c(0, 1), &g, &found);
        p.reset();
        assert!(!p.is_dragging());
        assert!(p.cells().is_empty());
        assert!(p.letters().is_empty());
    }

    #[test]
    fn test_path_stays_valid_under_noisy_moves() {
        let g = grid();
        let found = FoundWordStore::new();
        let mut p = PathTracker::new();
        p.start(c(1, 1), &g, &found).unwrap();
        let moves = [
            (1, 2), (2, 3), (0, 0), (2, 2), (1, 2), (3, 3), (2, 1), (1, 1),
            (0, 1), (0, 2), (3, 0), (1, 3), (0, 3), (0, 2), (1, 2),
        ];
        for (r, col) in moves {
            p.extend_or_truncate(c(r, col), &g, &found);
            assert_valid(p.cells());
            assert_eq!(p.letters(), g.spell(p.cells()));
        }
    }
}
