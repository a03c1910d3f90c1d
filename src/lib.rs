//! Word Strands core crate.
//!
//! A daily word-search puzzle: drag across adjacent letters (diagonals count)
//! to spell the hidden theme words. The selection engine ([`GameSession`] and
//! the pieces it orchestrates) is plain Rust with no browser dependency; the
//! `board` module is the canvas front end exported to JS.

use wasm_bindgen::prelude::*;

mod board;
pub mod config;
pub mod error;
pub mod found;
pub mod grid;
pub mod logging;
pub mod matcher;
pub mod path;
pub mod puzzle;
pub mod session;

pub use board::{BoardLayout, WORD_COLORS, word_color};
pub use config::GameConfig;
pub use error::{ConfigError, PuzzleError, SelectionError, StoreError};
pub use found::{FoundWord, FoundWordStore};
pub use grid::{Coordinate, Grid, is_adjacent};
pub use matcher::{MatchResult, NoMatchReason, WordMatcher};
pub use path::{PathChange, PathTracker};
pub use puzzle::{Puzzle, PuzzleCatalogue};
pub use session::{CellState, GameSession, GestureState, PointerId, Snapshot, WordListEntry};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Mount today's built-in puzzle with the default config.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    let config = GameConfig::default();
    logging::init(&config.log_level);
    board::start_board_mode(&config, None)
}

/// Mount with a JSON config and an optional JSON puzzle catalogue
/// (`{ "YYYY-MM-DD" | "default": puzzle }`). Empty strings mean "use defaults".
#[wasm_bindgen]
pub fn start_game_with(config_json: &str, puzzles_json: &str) -> Result<(), JsValue> {
    let config = if config_json.trim().is_empty() {
        GameConfig::default()
    } else {
        GameConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    logging::init(&config.log_level);
    let catalogue = Some(puzzles_json).filter(|s| !s.trim().is_empty());
    board::start_board_mode(&config, catalogue)
}

/// JSON snapshot of the running session.
#[wasm_bindgen]
pub fn snapshot_json() -> Result<String, JsValue> {
    board::snapshot_json()
}
