//! Wall generation and starting mice placement.
//!
//! Walls are drawn per column, independently: a uniform count in the
//! configured range, on distinct rows. Mice are then seated on valid
//! support cells inside each player's starting columns.

use crate::game::grid::{is_empty, Grid};
use crate::game::types::{Cell, Owner, Position};
use crate::config::game::GameConfig;
use log::warn;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Place a random number of walls in one column, on distinct rows.
///
/// The count is uniform in `[min_walls_per_column, max_walls_per_column]`;
/// the rows are an unbiased sample without replacement, so this never
/// loops redrawing duplicates.
pub fn generate_walls_for_column(grid: &mut Grid, col: usize, config: &GameConfig, rng: &mut impl Rng) {
    let height = grid.len();
    let num_walls = rng
        .random_range(config.min_walls_per_column..=config.max_walls_per_column)
        .min(height);

    for row in index::sample(rng, height, num_walls) {
        grid[row][col] = Cell::Wall;
    }
}

/// Place walls in every column of the grid.
pub fn generate_walls(grid: &mut Grid, config: &GameConfig, rng: &mut impl Rng) {
    let width = grid.first().map_or(0, |r| r.len());
    for col in 0..width {
        generate_walls_for_column(grid, col, config, rng);
    }
}

/// All empty rows in `col` that can hold a mouse: everything stacked
/// upward from the support surface, which sits on top of the first wall
/// found scanning from the floor (the floor itself when the column has
/// no wall).
pub fn valid_support_rows(grid: &Grid, col: usize) -> Vec<usize> {
    let height = grid.len();
    let surface = (0..height)
        .rev()
        .find(|&row| grid[row][col] == Cell::Wall)
        .map_or(height, |wall_row| wall_row);

    // Rows above the surface, bottom-up, skipping any higher wall.
    (0..surface)
        .rev()
        .filter(|&row| grid[row][col] == Cell::Empty)
        .collect()
}

/// Seat up to `count` mice for one player inside their starting columns.
///
/// Collects every valid support cell across the columns, shuffles them,
/// and places in shuffled order, re-checking emptiness right before each
/// placement. Returns the positions actually seated; fewer than `count`
/// means the columns ran out of room, which is reported to the caller as
/// a shortfall rather than an error.
pub fn place_mice_for_player(
    grid: &mut Grid,
    owner: Owner,
    columns: &[usize],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Position> {
    let mut candidates: Vec<Position> = columns
        .iter()
        .flat_map(|&col| {
            valid_support_rows(grid, col)
                .into_iter()
                .map(move |row| Position { row, col })
        })
        .collect();

    candidates.shuffle(rng);

    let mut placed = vec![];
    for pos in candidates {
        if placed.len() >= count {
            break;
        }
        if is_empty(grid, pos.row, pos.col) {
            grid[pos.row][pos.col] = owner.cell();
            placed.push(pos);
        }
    }

    if placed.len() < count {
        warn!(
            "only placed {} out of {} mice for {} - not enough valid positions",
            placed.len(),
            count,
            owner
        );
    }

    placed
}
