// Dataset invariants for the built-in puzzles.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use word_strands::puzzle::{self, GEMS_SOLUTION, GEMS_WORDS, PETS_SOLUTION, PETS_WORDS, SolutionPath};
use word_strands::{Coordinate, GameConfig, Puzzle, is_adjacent};

fn check(puzzle: &Puzzle, words: &[&str], solution: &[SolutionPath]) {
    let grid = puzzle.grid();
    let listed: HashSet<&str> = words.iter().copied().collect();
    let mut used = HashSet::new();
    for (word, cells) in solution {
        assert!(listed.contains(word), "solution word '{}' not in theme list", word);
        let path: Vec<Coordinate> = cells.iter().copied().map(Coordinate::from).collect();
        assert_eq!(grid.spell(&path), *word, "path for '{}' spells something else", word);
        for pair in path.windows(2) {
            assert!(is_adjacent(pair[0], pair[1]), "'{}' jumps from {} to {}", word, pair[0], pair[1]);
        }
        for cell in path {
            assert!(used.insert(cell), "cell {} used twice (second time by '{}')", cell, word);
        }
    }
    assert_eq!(used.len(), grid.rows() * grid.cols(), "solution leaves cells uncovered");
    assert_eq!(solution.len(), words.len());
}

#[test]
fn gems_solution_covers_grid_exactly_once() {
    let p = puzzle::gems(&GameConfig::default()).unwrap();
    check(&p, &GEMS_WORDS, &GEMS_SOLUTION);
}

#[test]
fn pets_solution_covers_grid_exactly_once() {
    let p = puzzle::pets(&GameConfig::default()).unwrap();
    check(&p, &PETS_WORDS, &PETS_SOLUTION);
}

#[test]
fn builtin_theme_words_are_uppercase_and_unique() {
    for words in [&GEMS_WORDS[..], &PETS_WORDS[..]] {
        let mut seen = HashSet::new();
        for w in words {
            assert!(seen.insert(*w), "duplicate word '{}'", w);
            assert!(w.len() >= 3, "'{}' shorter than the minimum", w);
            assert!(w.chars().all(|c| c.is_ascii_uppercase()), "'{}' not uppercase", w);
        }
    }
}
