//! Gravity resolution system.
//!
//! After a column shift, every mouse falls and slides toward its owner's
//! goal edge until nothing can move. The acting player's mice settle
//! first, fully, before the opponent's: resolution is not commutative,
//! since a settled mouse blocks or frees cells for the ones after it.

use crate::game::grid::{is_empty, Grid};
use crate::game::state::GameState;
use crate::game::types::{Cell, MicroMove, Owner, Position};
use log::debug;

/// Settle all mice for both players, mover first. Returns the ordered
/// micro-move log for the whole resolution pass; scores and mice indices
/// on `state` are updated in place.
pub fn settle_mice(state: &mut GameState, mover: Owner) -> Vec<MicroMove> {
    let mut log = vec![];

    for owner in [mover, mover.opponent()] {
        match owner {
            Owner::Blue => settle_for_owner(
                &mut state.grid,
                Owner::Blue,
                &mut state.blue_mice,
                &mut state.blue_score,
                &mut log,
            ),
            Owner::Red => settle_for_owner(
                &mut state.grid,
                Owner::Red,
                &mut state.red_mice,
                &mut state.red_score,
                &mut log,
            ),
        }
    }

    log
}

fn settle_for_owner(
    grid: &mut Grid,
    owner: Owner,
    mice: &mut Vec<Position>,
    score: &mut u32,
    log: &mut Vec<MicroMove>,
) {
    let height = grid.len();
    let width = grid.first().map_or(0, |r| r.len());
    let goal = owner.goal_column(width);
    let step = owner.goal_step();

    // Closest-to-goal first: mice furthest along clear the path before
    // trailing mice advance into the cells they vacate. Distance ties go
    // bottom-most first, so a stacked mouse vacates its cell before the
    // one resting on it is considered.
    let mut order = mice.clone();
    order.sort_by_key(|pos| (goal.abs_diff(pos.col), std::cmp::Reverse(pos.row)));

    let mut survivors = Vec::with_capacity(order.len());

    for mut pos in order {
        let mut exited = false;

        loop {
            // Falling wins over sliding.
            if pos.row + 1 < height && is_empty(grid, pos.row + 1, pos.col) {
                let to = Position { row: pos.row + 1, col: pos.col };
                apply_step(grid, owner, pos, to, false, log);
                pos = to;
                continue;
            }

            let target = pos.col as isize + step;
            if target >= 0 && (target as usize) < width && is_empty(grid, pos.row, target as usize) {
                let to = Position { row: pos.row, col: target as usize };
                let scored = to.col == goal;
                apply_step(grid, owner, pos, to, scored, log);
                pos = to;

                if scored {
                    // The mouse has exited the board.
                    grid[pos.row][pos.col] = Cell::Empty;
                    *score += 1;
                    exited = true;
                    break;
                }
                continue;
            }

            // At rest for this pass.
            break;
        }

        if !exited {
            survivors.push(pos);
        }
    }

    debug!(
        "settled {} mice for {}, {} exited",
        survivors.len(),
        owner,
        mice.len() - survivors.len()
    );
    *mice = survivors;
}

/// Commit one micro-move: vacate the old cell, occupy the new one, and
/// append it to the log. Later occupancy checks in the same pass see the
/// updated grid.
fn apply_step(
    grid: &mut Grid,
    owner: Owner,
    from: Position,
    to: Position,
    scored: bool,
    log: &mut Vec<MicroMove>,
) {
    grid[from.row][from.col] = Cell::Empty;
    grid[to.row][to.col] = owner.cell();
    log.push(MicroMove { owner, from, to, scored });
}
