// Demo module for the game. Provides an interactive terminal loop for
// playing locally.
pub mod game_loop;
