/// Game configuration constants.
///
/// This module defines the default gameplay parameters: grid dimensions,
/// wall density per column, and starting mice counts.
use serde::{Deserialize, Serialize};

/// Number of columns in the game grid.
pub const GRID_WIDTH: usize = 19;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: usize = 13;

/// Number of mice each player starts with.
pub const MICE_PER_PLAYER: usize = 12;

/// Minimum number of walls generated in each column.
pub const MIN_WALLS_PER_COLUMN: usize = 5;

/// Maximum number of walls generated in each column.
pub const MAX_WALLS_PER_COLUMN: usize = 8;

/// Tunable parameters for a single game.
///
/// `Default` reproduces the standard 19x13 board: blue mice start in the
/// left nine columns, red mice in the right nine, with the middle column
/// left as neutral ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub min_walls_per_column: usize,
    pub max_walls_per_column: usize,
    pub mice_per_player: usize,
    /// Columns where blue mice may be seated at game start.
    pub blue_columns: Vec<usize>,
    /// Columns where red mice may be seated at game start.
    pub red_columns: Vec<usize>,
    /// Seed for deterministic board generation. `None` draws from the
    /// thread-local generator.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            min_walls_per_column: MIN_WALLS_PER_COLUMN,
            max_walls_per_column: MAX_WALLS_PER_COLUMN,
            mice_per_player: MICE_PER_PLAYER,
            blue_columns: (0..GRID_WIDTH / 2).collect(),
            red_columns: (GRID_WIDTH / 2 + 1..GRID_WIDTH).collect(),
            seed: None,
        }
    }
}
