pub mod core;
pub mod game;
pub mod input;
pub mod rendering;
pub mod simulate;
pub mod ui;
