//! Engine adapters
//!
//! - [`rules`]: authoritative legality through the [`RulesEngine`] contract
//! - [`pair`]: the single entry point that applies a half-move to both engines

pub mod pair;
pub mod rules;

pub use pair::{EnginePair, Played};
pub use rules::{GameStatus, PositionKey, RulesEngine, ShakmatyRules};
