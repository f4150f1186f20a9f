//! Core value types shared by the resolver, the engines and the scene
//!
//! Squares are `shakmaty::Square` throughout the crate. The square index in
//! [`crate::game::square`] is the only place that converts between squares and
//! board coordinates.
//!
//! # Move values
//!
//! - [`MoveCandidate`] - unvalidated `(source, target, promotion?)` triple produced
//!   by the input layer or the opponent engine
//! - [`MoveResult`] - what the rules engine reports after accepting a candidate,
//!   including the special-move [`MoveClass`]

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use shakmaty::{Color, File, Rank, Role, Square};
use std::fmt;
use std::str::FromStr;

/// The two sides of a match
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank the side's king and rooks start on
    pub fn home_rank(self) -> Rank {
        match self {
            Side::White => Rank::First,
            Side::Black => Rank::Eighth,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Side::White),
            "black" | "b" => Ok(Side::Black),
            other => Err(format!("unknown side '{other}'")),
        }
    }
}

/// Piece kinds, one template mesh each
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to, in picker order
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTION_CHOICES.contains(&self)
    }

    /// Material value in pawns (king counts as zero)
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Upper-case SAN letter; pawns have none
    pub fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl From<Role> for PieceKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Pawn => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for Role {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Role::Pawn,
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook,
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King,
        }
    }
}

/// An unvalidated move proposal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCandidate {
    pub source: Square,
    pub target: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveCandidate {
    pub fn new(source: Square, target: Square) -> Self {
        Self {
            source,
            target,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.target)?;
        if let Some(kind) = self.promotion.and_then(PieceKind::letter) {
            write!(f, "={kind}")?;
        }
        Ok(())
    }
}

/// Special-move classification reported with every accepted move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum MoveClass {
    Normal,
    Capture,
    KingSideCastle,
    QueenSideCastle,
    EnPassant,
}

/// A move accepted by the rules engine
///
/// For castling, `source`/`target` are the king's squares (e1 → g1), never the
/// rook's. `captured_square` differs from `target` only for en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub kind: PieceKind,
    pub side: Side,
    pub source: Square,
    pub target: Square,
    pub class: MoveClass,
    pub captured: Option<PieceKind>,
    pub captured_square: Option<Square>,
    pub promotion: Option<PieceKind>,
}

impl MoveResult {
    /// A pawn landing on the first or last rank
    pub fn is_promotion_candidate(&self) -> bool {
        self.kind == PieceKind::Pawn
            && matches!(self.target.rank(), Rank::First | Rank::Eighth)
    }

    pub fn is_capture(&self) -> bool {
        matches!(self.class, MoveClass::Capture | MoveClass::EnPassant)
    }

    /// Rook squares `(from, to)` for castling moves
    pub fn rook_hop(&self) -> Option<(Square, Square)> {
        let rank = self.source.rank();
        match self.class {
            MoveClass::KingSideCastle => Some((
                Square::from_coords(File::H, rank),
                Square::from_coords(File::F, rank),
            )),
            MoveClass::QueenSideCastle => Some((
                Square::from_coords(File::A, rank),
                Square::from_coords(File::D, rank),
            )),
            _ => None,
        }
    }

    /// The candidate that reproduces this result
    pub fn candidate(&self) -> MoveCandidate {
        MoveCandidate {
            source: self.source,
            target: self.target,
            promotion: self.promotion,
        }
    }

    /// Short algebraic-style text for the move list (no check markers)
    pub fn notation(&self) -> String {
        match self.class {
            MoveClass::KingSideCastle => return "O-O".to_string(),
            MoveClass::QueenSideCastle => return "O-O-O".to_string(),
            _ => {}
        }
        let mut text = String::new();
        match self.kind.letter() {
            Some(letter) => text.push(letter),
            None if self.is_capture() => text.push(self.source.file().char()),
            None => {}
        }
        if self.is_capture() {
            text.push('x');
        }
        text.push_str(&self.target.to_string());
        if let Some(letter) = self.promotion.and_then(PieceKind::letter) {
            text.push('=');
            text.push(letter);
        }
        if self.class == MoveClass::EnPassant {
            text.push_str(" e.p.");
        }
        text
    }
}
