//! Opponent engine
//!
//! The automated side is driven through the [`DecisionEngine`] contract. The
//! session only asks it for a move on the automated side's turn and feeds it
//! every committed half-move, so it never reads the scene or the rules engine.
//!
//! - [`Difficulty`]: strength setting carried in the match config
//! - [`GreedyOpponent`]: built-in one-ply engine

pub mod opponent;
pub mod resource;

pub use opponent::{DecisionEngine, GreedyOpponent};
pub use resource::Difficulty;
