//! Puzzle content and daily selection.
//!
//! A [`Puzzle`] is the immutable input of a session: the letter grid, the theme
//! label and the words to find. Built-in puzzles live in `puzzle_*.rs` files;
//! more can be loaded from JSON. Which puzzle is "today's" is decided here and
//! is invisible to the session.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::GameConfig;
use crate::error::PuzzleError;
use crate::grid::Grid;

mod puzzle_gems;
mod puzzle_pets;

pub use puzzle_gems::{GEMS_DATE, GEMS_GRID, GEMS_SOLUTION, GEMS_THEME, GEMS_WORDS};
pub use puzzle_pets::{PETS_GRID, PETS_SOLUTION, PETS_THEME, PETS_WORDS};

/// A theme word with the cells that spell it, as (row, col) pairs.
pub type SolutionPath = (&'static str, &'static [(usize, usize)]);

/// Key of the fallback entry in a date-keyed catalogue.
pub const DEFAULT_KEY: &str = "default";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    theme: String,
    date: Option<NaiveDate>,
    grid: Grid,
    theme_words: Vec<String>,
}

impl Puzzle {
    /// Validate and build a puzzle. Words are uppercased.
    ///
    /// Whether every word can actually be traced in the grid is not checked.
    pub fn new<R, S, W>(
        theme: &str,
        date: Option<NaiveDate>,
        rows: R,
        words: W,
        config: &GameConfig,
    ) -> Result<Self, PuzzleError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        let grid = Grid::new(rows, config)?;
        let mut seen = HashSet::new();
        let mut theme_words = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(PuzzleError::InvalidWord { word });
            }
            if word.len() < config.min_word_length {
                return Err(PuzzleError::WordTooShort {
                    word,
                    min: config.min_word_length,
                });
            }
            if !seen.insert(word.clone()) {
                return Err(PuzzleError::DuplicateThemeWord(word));
            }
            theme_words.push(word);
        }
        if theme_words.is_empty() {
            return Err(PuzzleError::NoThemeWords);
        }
        Ok(Self {
            theme: theme.to_string(),
            date,
            grid,
            theme_words,
        })
    }

    /// Parse a single puzzle object.
    pub fn from_json(json: &str, config: &GameConfig) -> Result<Self, PuzzleError> {
        let data: PuzzleData = serde_json::from_str(json)?;
        data.into_puzzle(config)
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn theme_words(&self) -> &[String] {
        &self.theme_words
    }

    /// Split into the parts a session takes ownership of.
    pub fn into_parts(self) -> (Grid, Vec<String>) {
        (self.grid, self.theme_words)
    }
}

/// Built-in "Precious Gems" puzzle.
pub fn gems(config: &GameConfig) -> Result<Puzzle, PuzzleError> {
    Puzzle::new(
        GEMS_THEME,
        Some(parse_date(GEMS_DATE)?),
        GEMS_GRID,
        GEMS_WORDS,
        config,
    )
}

/// Built-in 4x4 "Pets" puzzle.
pub fn pets(config: &GameConfig) -> Result<Puzzle, PuzzleError> {
    Puzzle::new(PETS_THEME, None, PETS_GRID, PETS_WORDS, config)
}

pub fn parse_date(date: &str) -> Result<NaiveDate, PuzzleError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| PuzzleError::InvalidDate {
        date: date.to_string(),
        source,
    })
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// 32-bit string hash over UTF-16 code units (`h = h * 31 + unit`, wrapping).
pub fn hash_code(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit as i32)
    })
}

// --- JSON shapes --------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RowData {
    Text(String),
    Letters(Vec<String>),
}

impl RowData {
    fn into_string(self) -> String {
        match self {
            RowData::Text(s) => s,
            RowData::Letters(cells) => cells.concat(),
        }
    }
}

#[derive(Deserialize)]
struct PuzzleData {
    theme: String,
    #[serde(default)]
    date: Option<String>,
    grid: Vec<RowData>,
    #[serde(alias = "themeWords", alias = "words")]
    theme_words: Vec<String>,
}

impl PuzzleData {
    fn into_puzzle(self, config: &GameConfig) -> Result<Puzzle, PuzzleError> {
        // A multi-letter cell would silently shift the row, so reject it here.
        let mut rows = Vec::with_capacity(self.grid.len());
        for (r, row) in self.grid.into_iter().enumerate() {
            if let RowData::Letters(cells) = &row {
                if let Some((c, bad)) = cells.iter().enumerate().find(|(_, s)| s.chars().count() != 1) {
                    return Err(PuzzleError::InvalidLetter {
                        row: r,
                        col: c,
                        letter: bad.clone(),
                    });
                }
            }
            rows.push(row.into_string());
        }
        let date = self.date.as_deref().map(parse_date).transpose()?;
        Puzzle::new(&self.theme, date, rows, self.theme_words, config)
    }
}

// --- Catalogue ----------------------------------------------------------------

/// Ordered set of puzzles with optional date keys.
#[derive(Clone, Debug, Default)]
pub struct PuzzleCatalogue {
    puzzles: Vec<Puzzle>,
    keyed: BTreeMap<String, usize>,
}

impl PuzzleCatalogue {
    pub fn builtin(config: &GameConfig) -> Result<Self, PuzzleError> {
        let mut catalogue = Self::default();
        catalogue.push(gems(config)?);
        catalogue.push(pets(config)?);
        Ok(catalogue)
    }

    /// Load a `{ "YYYY-MM-DD" | "default": puzzle }` map.
    pub fn from_json(json: &str, config: &GameConfig) -> Result<Self, PuzzleError> {
        let map: BTreeMap<String, PuzzleData> = serde_json::from_str(json)?;
        let mut catalogue = Self::default();
        for (key, data) in map {
            if key != DEFAULT_KEY {
                parse_date(&key)?;
            }
            let idx = catalogue.puzzles.len();
            catalogue.puzzles.push(data.into_puzzle(config)?);
            catalogue.keyed.insert(key, idx);
        }
        if catalogue.is_empty() {
            return Err(PuzzleError::EmptyCatalogue);
        }
        Ok(catalogue)
    }

    /// Append a puzzle, keyed by its date when it has one.
    pub fn push(&mut self, puzzle: Puzzle) {
        let idx = self.puzzles.len();
        if let Some(date) = puzzle.date() {
            self.keyed.insert(date.format("%Y-%m-%d").to_string(), idx);
        }
        self.puzzles.push(puzzle);
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Deterministic rotation: hash of the ISO date modulo the catalogue size.
    pub fn daily(&self, date: NaiveDate) -> Result<&Puzzle, PuzzleError> {
        if self.puzzles.is_empty() {
            return Err(PuzzleError::EmptyCatalogue);
        }
        let key = date.format("%Y-%m-%d").to_string();
        let idx = hash_code(&key).unsigned_abs() as usize % self.puzzles.len();
        tracing::debug!(date = %key, idx, "selected daily puzzle");
        Ok(&self.puzzles[idx])
    }

    /// Exact date entry, else the `default` entry, else [`Self::daily`].
    pub fn by_date(&self, date: NaiveDate) -> Result<&Puzzle, PuzzleError> {
        let key = date.format("%Y-%m-%d").to_string();
        match self.keyed.get(&key).or_else(|| self.keyed.get(DEFAULT_KEY)) {
            Some(&idx) => Ok(&self.puzzles[idx]),
            None => self.daily(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Coordinate, is_adjacent};

    fn check_solution(puzzle: &Puzzle, solution: &[SolutionPath]) {
        let grid = puzzle.grid();
        let mut covered = HashSet::new();
        for (word, cells) in solution {
            let path: Vec<Coordinate> = cells.iter().copied().map(Coordinate::from).collect();
            assert_eq!(grid.spell(&path), *word);
            for pair in path.windows(2) {
                assert!(is_adjacent(pair[0], pair[1]), "{word}: {:?}", pair);
            }
            for cell in path {
                assert!(covered.insert(cell), "{word} reuses {cell}");
            }
        }
        assert_eq!(covered.len(), grid.rows() * grid.cols());
        assert_eq!(solution.len(), puzzle.theme_words().len());
    }

    #[test]
    fn test_builtin_solutions_tile_their_grids() {
        let config = GameConfig::default();
        check_solution(&gems(&config).unwrap(), &GEMS_SOLUTION);
        check_solution(&pets(&config).unwrap(), &PETS_SOLUTION);
    }

    #[test]
    fn test_gems_shape() {
        let p = gems(&GameConfig::default()).unwrap();
        assert_eq!((p.grid().rows(), p.grid().cols()), (8, 6));
        assert_eq!(p.grid().row_strings()[0], "URAPPI");
        assert_eq!(p.date(), Some(NaiveDate::from_ymd_opt(2025, 6, 27).unwrap()));
    }

    #[test]
    fn test_hash_code_matches_reference_values() {
        assert_eq!(hash_code(""), 0);
        assert_eq!(hash_code("a"), 97);
        assert_eq!(hash_code("ab"), 97 * 31 + 98);
        // wraps instead of overflowing
        let long = "2025-06-27".repeat(10);
        let _ = hash_code(&long);
    }

    #[test]
    fn test_words_are_uppercased_and_validated() {
        let config = GameConfig::default();
        let p = Puzzle::new("t", None, ["abc"], ["abc"], &config).unwrap();
        assert_eq!(p.theme_words(), &["ABC".to_string()]);
        assert!(matches!(
            Puzzle::new("t", None, ["abc"], ["ab"], &config),
            Err(PuzzleError::WordTooShort { min: 3, .. })
        ));
        assert!(matches!(
            Puzzle::new("t", None, ["abc"], ["abc", "ABC"], &config),
            Err(PuzzleError::DuplicateThemeWord(_))
        ));
        assert!(matches!(
            Puzzle::new("t", None, ["abc"], ["a-c"], &config),
            Err(PuzzleError::InvalidWord { .. })
        ));
        let none: [&str; 0] = [];
        assert!(matches!(
            Puzzle::new("t", None, ["abc"], none, &config),
            Err(PuzzleError::NoThemeWords)
        ));
    }

    #[test]
    fn test_puzzle_json_accepts_both_grid_shapes() {
        let config = GameConfig::default();
        let p = Puzzle::from_json(
            r#"{"theme":"Pets","grid":[["C","A","T"],"DOG"],"themeWords":["cat","dog"]}"#,
            &config,
        )
        .unwrap();
        assert_eq!(p.grid().row_strings(), vec!["CAT".to_string(), "DOG".to_string()]);
        assert_eq!(p.theme_words(), &["CAT".to_string(), "DOG".to_string()]);

        let err = Puzzle::from_json(
            r#"{"theme":"x","grid":[["CA","T"]],"words":["cat"]}"#,
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidLetter { row: 0, col: 0, .. }));
    }

    #[test]
    fn test_daily_is_deterministic_and_in_range() {
        let catalogue = PuzzleCatalogue::builtin(&GameConfig::default()).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
        let a = catalogue.daily(date).unwrap();
        let b = catalogue.daily(date).unwrap();
        assert_eq!(a, b);
        let idx = hash_code("2025-06-27").unsigned_abs() as usize % catalogue.len();
        assert_eq!(a, &catalogue.puzzles()[idx]);
    }

    #[test]
    fn test_by_date_prefers_exact_then_default() {
        let json = r#"{
            "2025-01-02": {"theme":"Farm","grid":["COW","PIG"],"words":["COW","PIG"]},
            "default": {"theme":"Pets","grid":["CAT","DOG"],"words":["CAT","DOG"]}
        }"#;
        let catalogue = PuzzleCatalogue::from_json(json, &GameConfig::default()).unwrap();
        let exact = catalogue.by_date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()).unwrap();
        assert_eq!(exact.theme(), "Farm");
        let other = catalogue.by_date(NaiveDate::from_ymd_opt(2030, 5, 5).unwrap()).unwrap();
        assert_eq!(other.theme(), "Pets");
    }

    #[test]
    fn test_catalogue_rejects_bad_keys_and_empty_maps() {
        let config = GameConfig::default();
        let bad = r#"{"tomorrow": {"theme":"x","grid":["CAT"],"words":["CAT"]}}"#;
        assert!(matches!(
            PuzzleCatalogue::from_json(bad, &config),
            Err(PuzzleError::InvalidDate { .. })
        ));
        assert!(matches!(
            PuzzleCatalogue::from_json("{}", &config),
            Err(PuzzleError::EmptyCatalogue)
        ));
        assert!(matches!(
            PuzzleCatalogue::default().daily(today()),
            Err(PuzzleError::EmptyCatalogue)
        ));
    }
}
