//! Captured pieces tally
//!
//! Positive material advantage means White is ahead.

use crate::game::types::{PieceKind, Side};

/// Pieces taken by each side
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Black pieces White has taken
    pub white_captured: Vec<PieceKind>,
    /// White pieces Black has taken
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Credit `captor` with taking `kind`
    pub fn add_capture(&mut self, captor: Side, kind: PieceKind) {
        match captor {
            Side::White => self.white_captured.push(kind),
            Side::Black => self.black_captured.push(kind),
        }
    }

    pub fn taken_by(&self, captor: Side) -> &[PieceKind] {
        match captor {
            Side::White => &self.white_captured,
            Side::Black => &self.black_captured,
        }
    }

    pub fn material_advantage(&self) -> i32 {
        let score = |taken: &[PieceKind]| taken.iter().map(|k| k.value() as i32).sum::<i32>();
        score(&self.white_captured) - score(&self.black_captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_pieces_default() {
        let captured = CapturedPieces::default();
        assert!(captured.white_captured.is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_material_advantage() {
        //! Rook + pawn against a knight leaves White three pawns up
        let mut captured = CapturedPieces::default();
        captured.add_capture(Side::White, PieceKind::Rook);
        captured.add_capture(Side::White, PieceKind::Pawn);
        captured.add_capture(Side::Black, PieceKind::Knight);

        assert_eq!(captured.material_advantage(), 3);
        assert_eq!(captured.taken_by(Side::Black), &[PieceKind::Knight]);
    }
}
