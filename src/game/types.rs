use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The two players. Blue pushes toward the rightmost column, red toward
/// the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Blue,
    Red,
}

impl Owner {
    pub fn opponent(self) -> Owner {
        match self {
            Owner::Blue => Owner::Red,
            Owner::Red => Owner::Blue,
        }
    }

    /// The column this player's mice must reach to score.
    pub fn goal_column(self, width: usize) -> usize {
        match self {
            Owner::Blue => width - 1,
            Owner::Red => 0,
        }
    }

    /// Horizontal step toward this player's goal column.
    pub fn goal_step(self) -> isize {
        match self {
            Owner::Blue => 1,
            Owner::Red => -1,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Owner::Blue => Cell::Mouse(Owner::Blue),
            Owner::Red => Cell::Mouse(Owner::Red),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Blue => write!(f, "blue"),
            Owner::Red => write!(f, "red"),
        }
    }
}

/// Contents of one grid cell. Occupancy lives here and nowhere else; the
/// per-owner position indices are rebuilt from the grid after every
/// structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Mouse(Owner),
}

impl Cell {
    /// Stable numeric encoding for serialized boards:
    /// empty = 0, wall = 1, blue mouse = 2, red mouse = 3.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Wall => 1,
            Cell::Mouse(Owner::Blue) => 2,
            Cell::Mouse(Owner::Red) => 3,
        }
    }

    pub fn is_mouse(self) -> bool {
        matches!(self, Cell::Mouse(_))
    }
}

/// Direction a column is shifted: one cyclic step up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftDirection {
    Up,
    Down,
}

/// One single-cell displacement of one mouse during a resolution pass.
/// The ordered list of these is the full animation log for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroMove {
    pub owner: Owner,
    pub from: Position,
    pub to: Position,
    /// True when this step put the mouse on its goal column and removed
    /// it from the board.
    pub scored: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub blue: u32,
    pub red: u32,
}

/// Outcome of an accepted move: updated scores, whose turn is next, and
/// the ordered micro-moves a presentation layer may replay at its own
/// pace. The core state is already committed when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub scores: Scores,
    pub next_player: Owner,
    pub micro_moves: Vec<MicroMove>,
}

/// Why a move was rejected. Rejection never mutates game state; the
/// caller retries with different input or waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// The chosen column holds none of the current player's mice.
    InvalidColumn { column: usize },
    /// A previous move's resolution has not committed yet.
    BusyResolving,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidColumn { column } => {
                write!(f, "column {} holds no mice of the current player", column)
            }
            MoveError::BusyResolving => {
                write!(f, "a move is already being resolved")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// How many mice the initializer managed to seat for each player.
/// Falling short of `requested` is not fatal; the game starts with
/// fewer mice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub requested: usize,
    pub blue_placed: usize,
    pub red_placed: usize,
}

impl PlacementReport {
    pub fn is_short(&self) -> bool {
        self.blue_placed < self.requested || self.red_placed < self.requested
    }
}
