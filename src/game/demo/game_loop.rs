//! Standalone game loop for local testing/demo.
//!
//! This module provides an interactive loop for playing the game in the
//! terminal: two players at one keyboard, alternating column shifts.

use crate::config::game::GameConfig;
use crate::game::state::GameState;
use crate::game::systems::{print_grid, print_scores};
use crate::game::types::ShiftDirection;
use log::info;

use std::io::{self, Write};

/// Parse a move line of the form `<column> <u|d>`.
pub(crate) fn parse_move(input: &str) -> Option<(usize, ShiftDirection)> {
    let mut parts = input.split_whitespace();
    let column: usize = parts.next()?.parse().ok()?;
    let direction = match parts.next()? {
        "u" => ShiftDirection::Up,
        "d" => ShiftDirection::Down,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }

    Some((column, direction))
}

/// Prompt the current player for a move, re-prompting on malformed
/// input. Returns `None` only on quit or EOF.
fn get_player_input() -> Option<(usize, ShiftDirection)> {
    loop {
        print!("Enter move as '<column> <u|d>' (or 'q' to quit): ");
        io::stdout().flush().ok()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input).ok()? == 0 {
            return None;
        }
        let input = input.trim();
        if input == "q" {
            return None;
        }

        match parse_move(input) {
            Some(mv) => return Some(mv),
            None => println!("Could not read that move, expected '<column> <u|d>'."),
        }
    }
}

/// Run the interactive game loop until a player quits.
pub fn run_game_loop() {
    let config = GameConfig::default();
    let (mut game_state, report) = GameState::new(&config);

    if report.is_short() {
        println!(
            "Starting short-handed: blue {}/{}, red {}/{} mice seated.",
            report.blue_placed, report.requested, report.red_placed, report.requested
        );
    }

    println!("Game start!");
    print_grid(&game_state);
    print_scores(&game_state);

    loop {
        println!(
            "Playable columns for {}: {:?}",
            game_state.current_player,
            game_state.legal_columns(game_state.current_player)
        );

        let Some((column, direction)) = get_player_input() else {
            println!("Final score - blue {} : {} red", game_state.blue_score, game_state.red_score);
            break;
        };

        match game_state.make_move(column, direction) {
            Ok(result) => {
                info!("move on column {} produced {} micro-moves", column, result.micro_moves.len());
                print_grid(&game_state);
                print_scores(&game_state);
            }
            Err(err) => {
                println!("Move rejected: {}", err);
            }
        }
    }
}
