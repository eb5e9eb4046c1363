//! Grid model.
//!
//! Owns nothing itself: these are free functions over the raw cell matrix,
//! in row-major order with row 0 at the top and row `height - 1` on the
//! floor. All occupancy questions are answered from the grid; the mice
//! position indices are derived data rebuilt by `collect_mice`.

use crate::game::types::{Cell, Owner, Position, ShiftDirection};

pub type Grid = Vec<Vec<Cell>>;

pub fn generate_grid(rows: usize, cols: usize) -> Grid {
    vec![vec![Cell::Empty; cols]; rows]
}

/// Bounds-checked cell query. Out-of-range coordinates yield `None`
/// rather than panicking, so callers can probe neighbours freely.
pub fn cell_at(grid: &Grid, row: usize, col: usize) -> Option<Cell> {
    grid.get(row).and_then(|r| r.get(col)).copied()
}

/// True iff the cell exists and is empty. Out-of-bounds counts as not
/// empty, which stops mice from walking off (or wrapping around) the
/// board edges.
pub fn is_empty(grid: &Grid, row: usize, col: usize) -> bool {
    cell_at(grid, row, col) == Some(Cell::Empty)
}

/// Cyclically rotate one column by a single cell. `Up` carries the top
/// cell to the floor, `Down` carries the floor cell to the top. Walls and
/// mice rotate together; no cell is created or destroyed. O(height).
///
/// Callers must rebuild the mice indices afterwards (`collect_mice`).
pub fn rotate_column(grid: &mut Grid, col: usize, direction: ShiftDirection) {
    let height = grid.len();
    if height == 0 {
        return;
    }

    match direction {
        ShiftDirection::Up => {
            let top = grid[0][col];
            for row in 0..height - 1 {
                grid[row][col] = grid[row + 1][col];
            }
            grid[height - 1][col] = top;
        }
        ShiftDirection::Down => {
            let bottom = grid[height - 1][col];
            for row in (1..height).rev() {
                grid[row][col] = grid[row - 1][col];
            }
            grid[0][col] = bottom;
        }
    }
}

/// Rebuild the per-owner mice position indices from grid contents.
/// Returned in (blue, red) order, scanned top-to-bottom, left-to-right.
pub fn collect_mice(grid: &Grid) -> (Vec<Position>, Vec<Position>) {
    let mut blue = vec![];
    let mut red = vec![];

    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Mouse(Owner::Blue) => blue.push(Position { row, col }),
                Cell::Mouse(Owner::Red) => red.push(Position { row, col }),
                _ => {}
            }
        }
    }

    (blue, red)
}

/// Count mice of each owner on the board, for verification.
pub fn count_mice(grid: &Grid) -> (usize, usize) {
    let (blue, red) = collect_mice(grid);
    (blue.len(), red.len())
}

/// Count wall cells on the board. Rotation must keep this constant.
pub fn count_walls(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|&&c| c == Cell::Wall).count()
}
