pub mod gravity;
pub mod render;

pub use gravity::*;
pub use render::*;
