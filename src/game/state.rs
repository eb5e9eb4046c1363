use serde::{Deserialize, Serialize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::game::GameConfig;
use crate::game::entities::{generate_walls, place_mice_for_player};
use crate::game::grid::{cell_at, collect_mice, generate_grid, rotate_column, Grid};
use crate::game::systems::settle_mice;
use crate::game::types::{
    Cell, MoveError, MoveResult, Owner, PlacementReport, Position, Scores, ShiftDirection,
};

/// Full game state: the grid, the per-owner mice indices derived from it,
/// whose turn it is, and both scores. This struct exclusively owns the
/// board; presentation layers only get queries and move results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub blue_mice: Vec<Position>,
    pub red_mice: Vec<Position>,
    pub current_player: Owner,
    pub blue_score: u32,
    pub red_score: u32,
    /// Reentrancy guard: set while a move is being resolved, so a second
    /// move request cannot interleave with an uncommitted resolution.
    #[serde(skip)]
    pub(crate) resolving: bool,
}

impl GameState {
    /// Create a new game: empty grid, random walls per column, starting
    /// mice seated in each player's columns, blue to move.
    ///
    /// The report says how many mice were actually seated; fewer than
    /// requested means the starting columns ran out of support cells,
    /// which is not fatal.
    pub fn new(config: &GameConfig) -> (Self, PlacementReport) {
        match config.seed {
            Some(seed) => Self::new_with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::new_with_rng(config, &mut rand::rng()),
        }
    }

    /// Like `new`, with a caller-supplied generator (deterministic tests).
    pub fn new_with_rng(config: &GameConfig, rng: &mut impl Rng) -> (Self, PlacementReport) {
        let mut grid = generate_grid(config.height, config.width);
        generate_walls(&mut grid, config, rng);

        let blue = place_mice_for_player(
            &mut grid,
            Owner::Blue,
            &config.blue_columns,
            config.mice_per_player,
            rng,
        );
        let red = place_mice_for_player(
            &mut grid,
            Owner::Red,
            &config.red_columns,
            config.mice_per_player,
            rng,
        );

        let report = PlacementReport {
            requested: config.mice_per_player,
            blue_placed: blue.len(),
            red_placed: red.len(),
        };

        // Indices come from a final rescan, not from the placement lists,
        // so the grid stays the single source of truth.
        let (blue_mice, red_mice) = collect_mice(&grid);

        let state = GameState {
            grid,
            blue_mice,
            red_mice,
            current_player: Owner::Blue,
            blue_score: 0,
            red_score: 0,
            resolving: false,
        };

        (state, report)
    }

    /// Build a state around an existing grid (custom boards, replays).
    /// Mice indices are rescanned from the grid; blue to move, scores 0.
    pub fn from_grid(grid: Grid) -> Self {
        let (blue_mice, red_mice) = collect_mice(&grid);
        GameState {
            grid,
            blue_mice,
            red_mice,
            current_player: Owner::Blue,
            blue_score: 0,
            red_score: 0,
            resolving: false,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Read-only cell query for presentation layers. `None` out of bounds.
    pub fn cell_type(&self, row: usize, col: usize) -> Option<Cell> {
        cell_at(&self.grid, row, col)
    }

    pub fn scores(&self) -> Scores {
        Scores { blue: self.blue_score, red: self.red_score }
    }

    pub fn mice_for(&self, owner: Owner) -> &[Position] {
        match owner {
            Owner::Blue => &self.blue_mice,
            Owner::Red => &self.red_mice,
        }
    }

    /// Columns the given player may shift: those currently holding at
    /// least one of their mice. Ascending, deduplicated.
    pub fn legal_columns(&self, owner: Owner) -> Vec<usize> {
        let mut columns: Vec<usize> = self.mice_for(owner).iter().map(|pos| pos.col).collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }

    /// Execute one move for the current player: shift the chosen column,
    /// settle all mice (mover first), update scores, pass the turn.
    ///
    /// Rejected moves (`InvalidColumn`, `BusyResolving`) mutate nothing.
    /// On success the returned result carries the committed scores, the
    /// next player, and the ordered micro-move log.
    pub fn make_move(
        &mut self,
        column: usize,
        direction: ShiftDirection,
    ) -> Result<MoveResult, MoveError> {
        if self.resolving {
            return Err(MoveError::BusyResolving);
        }
        if !self.legal_columns(self.current_player).contains(&column) {
            return Err(MoveError::InvalidColumn { column });
        }

        self.resolving = true;
        let mover = self.current_player;

        rotate_column(&mut self.grid, column, direction);
        let (blue_mice, red_mice) = collect_mice(&self.grid);
        self.blue_mice = blue_mice;
        self.red_mice = red_mice;

        let micro_moves = settle_mice(self, mover);

        // Settling leaves the indices in resolution order; rebuild them
        // from the grid so every committed state carries scan order.
        let (blue_mice, red_mice) = collect_mice(&self.grid);
        self.blue_mice = blue_mice;
        self.red_mice = red_mice;

        self.current_player = mover.opponent();
        self.resolving = false;

        Ok(MoveResult {
            scores: self.scores(),
            next_player: self.current_player,
            micro_moves,
        })
    }
}
