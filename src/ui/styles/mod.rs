//! HUD styling

pub mod colors;

pub use colors::*;
