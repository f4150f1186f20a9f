//! Game systems
//!
//! Thin adapters between Bevy messages and the [`crate::game::session::MatchSession`].
//! All chess decisions happen in the session; systems only read messages,
//! lend it the registry and a scene, and forward its notices.
//!
//! - [`lifecycle`] - `StartMatch` and notice fan-out
//! - [`input`] - `SquareSelected` / `MoveAttempted`
//! - [`promotion`] - `PromotionChosen` / `PromotionCancelled`
//! - [`clock`] - countdown

pub mod clock;
pub mod input;
pub mod lifecycle;
pub mod params;
pub mod promotion;

pub use clock::tick_match_clock;
pub use input::{handle_move_attempted, handle_square_selected};
pub use lifecycle::{flush_notices, request_first_match, start_match};
pub use params::BoardAccess;
pub use promotion::handle_promotion_choice;
