//! Pending promotion record
//!
//! Stored while the player picks a piece for a pawn that reached the last
//! rank. The pawn entity stays on its source square and the rules engine has
//! already been rolled back, so discarding the record restores the position.

use crate::game::types::{PieceKind, Side};
use bevy::prelude::*;
use shakmaty::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub source: Square,
    pub target: Square,
    pub pawn: Entity,
    pub side: Side,
    /// Kind standing on `target`, when the promotion also captures
    pub capture: Option<PieceKind>,
}
