//! Entry point for the terminal demo.
//!
//! Initializes logging and runs the interactive two-player loop.

use mice_grid::game::demo::game_loop::run_game_loop;

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    run_game_loop();
}
