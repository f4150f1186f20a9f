//! Piece and board-cell components

use crate::game::square::{coordinate_of, is_light};
use crate::game::types::{PieceKind, Side};
use bevy::prelude::*;
use shakmaty::Square;

/// A piece in the scene
///
/// `square` is the single canonical location of the piece. Only the
/// [`crate::game::resources::PieceRegistry`] writes it.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind, square: Square) -> Self {
        Self { side, kind, square }
    }

    /// Uniform scale applied to the kind's template mesh
    pub fn base_scale(&self) -> f32 {
        match self.kind {
            PieceKind::Pawn => 0.18,
            PieceKind::Queen | PieceKind::King => 0.22,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 0.2,
        }
    }
}

/// Static board square; created once per match and never moved
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell {
    pub square: Square,
    pub light: bool,
}

impl BoardCell {
    pub fn new(square: Square) -> Self {
        Self {
            square,
            light: is_light(square),
        }
    }

    pub fn coordinate(&self) -> (u8, u8) {
        coordinate_of(self.square)
    }
}
