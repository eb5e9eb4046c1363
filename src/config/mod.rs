/// Main configuration module.
///
/// Re-exports the game configuration submodule.
pub mod game;
