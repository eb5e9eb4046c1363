//! Game rendering system (terminal).
//!
//! This module provides functions to print the grid and scores for
//! debugging/demo.

use crate::game::state::GameState;
use crate::game::types::{Cell, Owner};

/// Print the grid to the terminal, with column numbers along the top.
pub fn print_grid(state: &GameState) {
    print!("    ");
    for col in 0..state.width() {
        print!("{:<3}", col);
    }
    println!();

    for (row, cells) in state.grid.iter().enumerate() {
        print!("{:<4}", row);
        for cell in cells {
            let symbol = match cell {
                Cell::Empty => "· ",
                Cell::Wall => "██",
                Cell::Mouse(Owner::Blue) => "B ",
                Cell::Mouse(Owner::Red) => "R ",
            };
            print!("{:<3}", symbol);
        }
        println!();
    }
}

/// Print both scores and whose turn it is.
pub fn print_scores(state: &GameState) {
    println!(
        "--- blue {} : {} red --- {} to move",
        state.blue_score, state.red_score, state.current_player
    );
    println!(
        "mice on board - blue: {}, red: {}",
        state.blue_mice.len(),
        state.red_mice.len()
    );
    println!();
}
