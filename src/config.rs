//! Session configuration.
//!
//! Puzzle variants differ in grid size and minimum word length, so both are
//! parameters rather than constants. All fields default, so a partial JSON
//! object (or `{}`) is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
pub const DEFAULT_MAX_DIMENSION: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shortest selection that can ever count as a word.
    pub min_word_length: usize,
    pub max_rows: usize,
    pub max_cols: usize,
    /// `EnvFilter` directive used by [`crate::logging::init`].
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_rows: DEFAULT_MAX_DIMENSION,
            max_cols: DEFAULT_MAX_DIMENSION,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_rows == 0 || self.max_cols == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        Ok(())
    }
}
