//! Match state
//!
//! Apart from [`PieceRegistry`], these are plain values owned by the
//! [`crate::game::session::MatchSession`] rather than free-standing ECS
//! resources, so restarting a match replaces all of them at once.
//!
//! - [`PieceRegistry`] / [`PieceScene`] - piece entities and the square index
//! - [`CurrentTurn`] / [`TurnState`] - side to move
//! - [`MatchClock`] - Fischer clocks
//! - [`Selection`] - selected piece and its legal targets
//! - [`PendingPromotion`] - pawn waiting for a promotion choice
//! - [`MoveHistory`] / [`CapturedPieces`] - HUD bookkeeping
//! - [`MatchOutcome`] - terminal states

pub mod captured;
pub mod game_over;
pub mod history;
pub mod promotion;
pub mod registry;
pub mod selection;
pub mod timer;
pub mod turn;


pub use captured::CapturedPieces;
pub use game_over::MatchOutcome;
pub use history::{MoveHistory, MoveRecord};
pub use promotion::PendingPromotion;
pub use registry::{piece_transform, PieceRegistry, PieceScene, WorldScene};
pub use selection::Selection;
pub use timer::MatchClock;
pub use turn::{CurrentTurn, TurnState};
