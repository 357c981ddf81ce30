//! Match configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::BOAT_LENGTH;

/// Largest grid the text renderers can label.
pub const MAX_GRID_SIZE: u8 = 26;

/// Largest accepted bound on second-boat re-rolls at spawn.
pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;

/// Tunables for a match.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```json
/// { "grid_size": 12, "min_spawn_distance": 5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: u8,
    /// Minimum Manhattan distance between the two boats at spawn.
    pub min_spawn_distance: u8,
    /// How many times the second boat is re-rolled before a too-close
    /// placement is accepted anyway.
    pub max_spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            min_spawn_distance: 4,
            max_spawn_attempts: 100,
        }
    }
}

impl GameConfig {
    /// Check that a game can be set up with these values.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot hold a boat, is larger than
    /// [`MAX_GRID_SIZE`], or the spawn attempt bound is outside
    /// `1..=MAX_SPAWN_ATTEMPTS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = BOAT_LENGTH;
        if !(min..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
                min,
                max: MAX_GRID_SIZE,
            });
        }
        if !(1..=MAX_SPAWN_ATTEMPTS).contains(&self.max_spawn_attempts) {
            return Err(ConfigError::SpawnAttempts {
                attempts: self.max_spawn_attempts,
                max: MAX_SPAWN_ATTEMPTS,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails [`validate`](Self::validate).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}
