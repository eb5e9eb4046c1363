//! Board population module.
//!
//! Wall generation and starting mice placement.

pub mod mice;

pub use mice::*;
