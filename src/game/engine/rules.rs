//! Rules engine adapter - authoritative legality and move metadata
//!
//! The core only talks to the rules engine through [`RulesEngine`]. The
//! production backend, [`ShakmatyRules`], wraps a `shakmaty::Chess` position and
//! keeps a stack of previous positions so the promotion flow can roll back a
//! speculative pawn move.
//!
//! # Castling encoding
//!
//! shakmaty encodes castling as "king takes own rook". The adapter translates
//! that to the king's landing square (g1/c1, g8/c8) so callers only ever see
//! the squares a player would click.

use crate::game::error::{LegalityError, LegalityReason};
use crate::game::types::{MoveCandidate, MoveClass, MoveResult, PieceKind, Side};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, File, Move, Position, Role, Square};
use std::fmt;

/// End-of-game state as reported by the rules engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Side },
    Stalemate,
    InsufficientMaterial,
}

/// Comparable snapshot of a position: piece placement plus side to move
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionKey(String);

impl PositionKey {
    pub fn of(position: &Chess) -> Self {
        let board = position.board();
        let mut text = String::with_capacity(72);
        for rank in (0..8u32).rev() {
            for file in 0..8u32 {
                let square = Square::from_coords(File::new(file), shakmaty::Rank::new(rank));
                text.push(match board.piece_at(square) {
                    Some(piece) if piece.color.is_white() => piece.role.char().to_ascii_uppercase(),
                    Some(piece) => piece.role.char(),
                    None => '.',
                });
            }
            if rank > 0 {
                text.push('/');
            }
        }
        text.push(' ');
        text.push(if position.turn().is_white() { 'w' } else { 'b' });
        Self(text)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contract the core requires from a rules engine
pub trait RulesEngine: Send + Sync {
    /// Validate and apply a move. A pawn reaching the last rank without an
    /// explicit promotion kind promotes to a queen.
    fn submit_move(
        &mut self,
        source: Square,
        target: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveResult, LegalityError>;

    /// Revert the most recent successful [`RulesEngine::submit_move`]
    ///
    /// One level only; a second undo in a row has nothing to revert.
    fn undo_last_move(&mut self) -> Result<(), LegalityError>;

    fn current_turn(&self) -> Side;

    fn status(&self) -> GameStatus;

    fn is_game_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    fn piece_at(&self, square: Square) -> Option<(PieceKind, Side)>;

    /// Squares the piece on `source` may legally move to (castles as king squares)
    fn legal_targets(&self, source: Square) -> Vec<Square>;

    fn position_key(&self) -> PositionKey;
}

/// Source and clickable target of a shakmaty move
pub fn move_endpoints(mv: &Move) -> Option<(Square, Square)> {
    match *mv {
        Move::Normal { from, to, .. } | Move::EnPassant { from, to } => Some((from, to)),
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Some((king, Square::from_coords(file, king.rank())))
        }
        Move::Put { .. } => None,
    }
}

fn move_promotion(mv: &Move) -> Option<Role> {
    match *mv {
        Move::Normal { promotion, .. } => promotion,
        _ => None,
    }
}

/// Find the legal move in `position` matching a candidate
///
/// Promotion moves without an explicit kind resolve to the queen promotion;
/// an explicit kind on a non-promoting move is ignored.
pub fn find_legal_move(
    position: &Chess,
    source: Square,
    target: Square,
    promotion: Option<PieceKind>,
) -> Option<Move> {
    let wanted = Role::from(promotion.unwrap_or(PieceKind::Queen));
    position.legal_moves().into_iter().find(|mv| {
        move_endpoints(mv) == Some((source, target))
            && move_promotion(mv).map_or(true, |role| role == wanted)
    })
}

/// Describe a legal move from the perspective of the position it is played in
pub fn describe_move(position: &Chess, mv: &Move) -> Option<MoveResult> {
    let (source, target) = move_endpoints(mv)?;
    let side = Side::from(position.turn());
    let result = match *mv {
        Move::Normal {
            role,
            capture,
            promotion,
            ..
        } => MoveResult {
            kind: role.into(),
            side,
            source,
            target,
            class: if capture.is_some() {
                MoveClass::Capture
            } else {
                MoveClass::Normal
            },
            captured: capture.map(PieceKind::from),
            captured_square: capture.map(|_| target),
            promotion: promotion.map(PieceKind::from),
        },
        Move::EnPassant { from, to } => MoveResult {
            kind: PieceKind::Pawn,
            side,
            source,
            target,
            class: MoveClass::EnPassant,
            captured: Some(PieceKind::Pawn),
            captured_square: Some(Square::from_coords(to.file(), from.rank())),
            promotion: None,
        },
        Move::Castle { king, rook } => MoveResult {
            kind: PieceKind::King,
            side,
            source,
            target,
            class: if rook.file() > king.file() {
                MoveClass::KingSideCastle
            } else {
                MoveClass::QueenSideCastle
            },
            captured: None,
            captured_square: None,
            promotion: None,
        },
        Move::Put { .. } => return None,
    };
    Some(result)
}

/// Build a position from an optional FEN string (standard start when `None`)
pub fn position_from_fen(fen: Option<&str>) -> Result<Chess, String> {
    let Some(text) = fen else {
        return Ok(Chess::default());
    };
    let fen: Fen = text.trim().parse().map_err(|e| format!("{e}"))?;
    fen.into_position(CastlingMode::Standard)
        .map_err(|e| format!("{e}"))
}

/// [`RulesEngine`] backed by shakmaty
#[derive(Clone, Debug, Default)]
pub struct ShakmatyRules {
    position: Chess,
    /// Position before the last submitted move
    previous: Option<Chess>,
}

impl ShakmatyRules {
    pub fn new(position: Chess) -> Self {
        Self {
            position,
            previous: None,
        }
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }
}

impl RulesEngine for ShakmatyRules {
    fn submit_move(
        &mut self,
        source: Square,
        target: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveResult, LegalityError> {
        let own_piece = self
            .position
            .board()
            .piece_at(source)
            .is_some_and(|piece| piece.color == self.position.turn());
        if !own_piece {
            return Err(LegalityError {
                from: source,
                to: target,
                reason: LegalityReason::NoPiece,
            });
        }

        let illegal = LegalityError {
            from: source,
            to: target,
            reason: LegalityReason::Illegal,
        };
        let mv = find_legal_move(&self.position, source, target, promotion).ok_or(illegal)?;
        let result = describe_move(&self.position, &mv).ok_or(illegal)?;
        let next = self.position.clone().play(mv).map_err(|_| illegal)?;

        self.previous = Some(std::mem::replace(&mut self.position, next));
        Ok(result)
    }

    fn undo_last_move(&mut self) -> Result<(), LegalityError> {
        let previous = self.previous.take().ok_or(LegalityError {
            from: Square::A1,
            to: Square::A1,
            reason: LegalityReason::NothingToUndo,
        })?;
        self.position = previous;
        Ok(())
    }

    fn current_turn(&self) -> Side {
        self.position.turn().into()
    }

    fn status(&self) -> GameStatus {
        if self.position.is_checkmate() {
            GameStatus::Checkmate {
                winner: Side::from(self.position.turn()).opponent(),
            }
        } else if self.position.is_stalemate() {
            GameStatus::Stalemate
        } else if self.position.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }

    fn piece_at(&self, square: Square) -> Option<(PieceKind, Side)> {
        self.position
            .board()
            .piece_at(square)
            .map(|piece| (piece.role.into(), piece.color.into()))
    }

    fn legal_targets(&self, source: Square) -> Vec<Square> {
        let mut targets: Vec<Square> = self
            .position
            .legal_moves()
            .iter()
            .filter_map(move_endpoints)
            .filter(|(from, _)| *from == source)
            .map(|(_, to)| to)
            .collect();
        targets.sort();
        targets.dedup();
        targets
    }

    fn position_key(&self) -> PositionKey {
        PositionKey::of(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(fen: &str) -> ShakmatyRules {
        ShakmatyRules::new(position_from_fen(Some(fen)).expect("valid fen"))
    }

    #[test]
    fn test_opening_pawn_push() {
        let mut rules = ShakmatyRules::default();
        let result = rules
            .submit_move(Square::E2, Square::E4, None)
            .expect("e2e4 is legal");

        assert_eq!(result.kind, PieceKind::Pawn);
        assert_eq!(result.side, Side::White);
        assert_eq!(result.class, MoveClass::Normal);
        assert_eq!(rules.current_turn(), Side::Black);
        assert_eq!(rules.piece_at(Square::E4), Some((PieceKind::Pawn, Side::White)));
        assert_eq!(rules.piece_at(Square::E2), None);
    }

    #[test]
    fn test_illegal_and_wrong_side() {
        let mut rules = ShakmatyRules::default();
        let err = rules.submit_move(Square::E2, Square::E5, None).unwrap_err();
        assert_eq!(err.reason, LegalityReason::Illegal);

        let err = rules.submit_move(Square::E7, Square::E5, None).unwrap_err();
        assert_eq!(err.reason, LegalityReason::NoPiece);

        let err = rules.submit_move(Square::E4, Square::E5, None).unwrap_err();
        assert_eq!(err.reason, LegalityReason::NoPiece);
        assert_eq!(rules.current_turn(), Side::White);
    }

    #[test]
    fn test_castles_reported_on_king_squares() {
        //! Castling is clicked king-first and reported with the king's landing square
        let mut rules = rules("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        assert!(rules.legal_targets(Square::E1).contains(&Square::G1));
        assert!(rules.legal_targets(Square::E1).contains(&Square::C1));

        let short = rules.submit_move(Square::E1, Square::G1, None).unwrap();
        assert_eq!(short.class, MoveClass::KingSideCastle);
        assert_eq!(rules.piece_at(Square::F1), Some((PieceKind::Rook, Side::White)));
        assert_eq!(rules.piece_at(Square::G1), Some((PieceKind::King, Side::White)));

        let long = rules.submit_move(Square::E8, Square::C8, None).unwrap();
        assert_eq!(long.class, MoveClass::QueenSideCastle);
        assert_eq!(long.side, Side::Black);
        assert_eq!(rules.piece_at(Square::D8), Some((PieceKind::Rook, Side::Black)));
    }

    #[test]
    fn test_en_passant_metadata() {
        let mut rules = rules("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        rules.submit_move(Square::D7, Square::D5, None).unwrap();
        let result = rules.submit_move(Square::E5, Square::D6, None).unwrap();

        assert_eq!(result.class, MoveClass::EnPassant);
        assert_eq!(result.captured_square, Some(Square::D5));
        assert_eq!(rules.piece_at(Square::D5), None);
    }

    #[test]
    fn test_promotion_defaults_to_queen_and_undo_restores() {
        let mut rules = rules("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let before = rules.position_key();

        let result = rules.submit_move(Square::A7, Square::A8, None).unwrap();
        assert_eq!(result.promotion, Some(PieceKind::Queen));
        assert!(result.is_promotion_candidate());

        rules.undo_last_move().unwrap();
        assert_eq!(rules.position_key(), before);

        let knight = rules
            .submit_move(Square::A7, Square::A8, Some(PieceKind::Knight))
            .unwrap();
        assert_eq!(knight.promotion, Some(PieceKind::Knight));
        assert_eq!(rules.piece_at(Square::A8), Some((PieceKind::Knight, Side::White)));
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut rules = ShakmatyRules::default();
        let err = rules.undo_last_move().unwrap_err();
        assert_eq!(err.reason, LegalityReason::NothingToUndo);
    }

    #[test]
    fn test_status_checkmate() {
        let mut rules = ShakmatyRules::default();
        for (from, to) in [
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ] {
            rules.submit_move(from, to, None).unwrap();
        }
        assert_eq!(rules.status(), GameStatus::Checkmate { winner: Side::Black });
        assert!(rules.is_game_over());
    }

    #[test]
    fn test_position_key_shape() {
        let key = ShakmatyRules::default().position_key();
        assert_eq!(
            key.to_string(),
            "rnbqkbnr/pppppppp/......../......../......../......../PPPPPPPP/RNBQKBNR w"
        );
    }

    #[test]
    fn test_bad_fen_is_reported() {
        assert!(position_from_fen(Some("not a fen")).is_err());
    }

    #[test]
    fn test_undo_keeps_a_single_level() {
        //! Only the last move can be taken back
        let mut rules = ShakmatyRules::default();
        rules.submit_move(Square::E2, Square::E4, None).unwrap();
        let after_e4 = rules.position_key();
        rules.submit_move(Square::E7, Square::E5, None).unwrap();

        rules.undo_last_move().unwrap();
        assert_eq!(rules.position_key(), after_e4);
        assert_eq!(
            rules.undo_last_move().unwrap_err().reason,
            LegalityReason::NothingToUndo
        );
        assert_eq!(rules.position_key(), after_e4);
    }
}
