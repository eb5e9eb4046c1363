//! Core simulation for a two-player gravity board game.
//!
//! A fixed grid holds random walls and player-owned mice. Each move
//! cyclically shifts one column, then every mouse falls and slides toward
//! its owner's goal edge; mice reaching the goal column score and leave
//! the board. The whole core is pure in-memory computation; rendering and
//! input live outside and consume queries and move results only.

pub mod config;
pub mod game;
