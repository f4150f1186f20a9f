//! Messages between the core and its collaborators
//!
//! Inbound messages come from picking and the HUD; [`MatchNotice`] goes out to
//! whatever displays the match.

use crate::game::resources::MatchOutcome;
use crate::game::types::{PieceKind, Side};
use bevy::prelude::*;
use shakmaty::Square;

/// A board square or a piece standing on it was clicked
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareSelected {
    pub square: Square,
}

/// Explicit source → target gesture (drag, keyboard, tests)
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAttempted {
    pub source: Square,
    pub target: Square,
}

/// The player picked a promotion piece
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionChosen {
    pub kind: PieceKind,
}

/// The player closed the promotion picker without choosing
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromotionCancelled;

/// Tear down the current match and start a new one from `MatchConfig`
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartMatch;

/// Outbound notifications for the UI
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchNotice {
    TurnChanged(Side),
    PromotionPending(Square),
    MatchEnded(MatchOutcome),
}
