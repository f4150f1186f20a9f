//! Chess game logic - move resolution and state synchronization
//!
//! Three representations of a match are kept in step: the rules engine
//! (authoritative legality), the scene (one entity per occupied square) and
//! the opponent engine. The [`session::MatchSession`] is the only place that
//! changes any of them.
//!
//! # Module Organization
//!
//! - `square` - square index: board coordinates ↔ squares
//! - `types` - sides, kinds, move candidates and move results
//! - `components` - `Piece` and `BoardCell`
//! - `resources` - piece registry and per-match state
//! - `engine` - rules engine contract, shakmaty backend, engine pair
//! - `ai` - opponent engine contract and the greedy opponent
//! - `mutation` - move result → ordered scene mutations
//! - `session` - match session and move resolver
//! - `events` - inbound messages and outbound notices
//! - `systems` / `plugin` / `system_sets` - Bevy wiring

pub mod ai;
pub mod components;
pub mod engine;
pub mod error;
pub mod events;
pub mod mutation;
pub mod plugin;
pub mod resources;
pub mod session;
pub mod square;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use plugin::GamePlugin;
pub use session::{MatchSession, MoveOutcome};
