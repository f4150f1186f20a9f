//! Decision engine adapter
//!
//! [`DecisionEngine`] is the contract the core needs from an opponent: pick a
//! move for the side to move, and mirror every committed half-move so it keeps
//! describing the same position as the rules engine.
//!
//! [`GreedyOpponent`] is the built-in implementation. It keeps a private
//! `shakmaty::Chess` copy of the game and never looks deeper than one reply.

use super::resource::Difficulty;
use crate::game::engine::rules::{describe_move, find_legal_move, move_endpoints, PositionKey};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{MoveCandidate, MoveResult, PieceKind};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use shakmaty::{Chess, Move, Position};

/// Opponent engine contract
pub trait DecisionEngine: Send + Sync {
    /// Choose a move for the side to move, `None` when it has no legal move
    fn select_move(&mut self, difficulty: Difficulty) -> Option<MoveCandidate>;

    /// Mirror a half-move already accepted by the rules engine
    fn observe(&mut self, played: &MoveResult) -> GameResult<()>;

    fn position_key(&self) -> PositionKey;
}

/// One-ply greedy opponent with a seedable RNG
pub struct GreedyOpponent {
    position: Chess,
    rng: StdRng,
}

impl GreedyOpponent {
    /// `seed` fixes the tie-breaking order; `None` seeds from the OS
    pub fn new(position: Chess, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { position, rng }
    }

    /// Capture and promotion gain, mate bonus, and (Hard) hanging-piece penalty
    fn score(&self, mv: &Move, difficulty: Difficulty) -> i32 {
        let mut score = 0;
        if let Some(captured) = mv.capture() {
            score += 10 * PieceKind::from(captured).value() as i32;
        }
        if let Some(promoted) = mv.promotion() {
            score += 10 * (PieceKind::from(promoted).value() as i32 - 1);
        }

        let Ok(after) = self.position.clone().play(mv.clone()) else {
            return score;
        };
        if after.is_checkmate() {
            return score + 10_000;
        }

        if difficulty == Difficulty::Hard {
            if let Some((_, landing)) = move_endpoints(mv) {
                let moved = mv.promotion().unwrap_or(mv.role());
                let moved_value = PieceKind::from(moved).value() as i32;
                let hangs = after.legal_moves().iter().any(|reply| {
                    reply.is_capture()
                        && reply.to() == landing
                        && (PieceKind::from(reply.role()).value() as i32) < moved_value
                });
                if hangs {
                    score -= 10 * moved_value;
                }
            }
        }
        score
    }
}

impl DecisionEngine for GreedyOpponent {
    fn select_move(&mut self, difficulty: Difficulty) -> Option<MoveCandidate> {
        let moves: Vec<Move> = self
            .position
            .legal_moves()
            .into_iter()
            .filter(|mv| move_endpoints(mv).is_some())
            .collect();

        let chosen = if difficulty.is_greedy() {
            let scored: Vec<(i32, Move)> =
                moves.iter().map(|mv| (self.score(mv, difficulty), mv.clone())).collect();
            let best = scored.iter().map(|(score, _)| *score).max()?;
            let top: Vec<Move> = scored
                .into_iter()
                .filter(|(score, _)| *score == best)
                .map(|(_, mv)| mv)
                .collect();
            top.choose(&mut self.rng)?.clone()
        } else {
            moves.choose(&mut self.rng)?.clone()
        };

        let result = describe_move(&self.position, &chosen)?;
        debug!(
            "[AI] {} picks {} ({})",
            result.side,
            result.candidate(),
            difficulty
        );
        Some(result.candidate())
    }

    fn observe(&mut self, played: &MoveResult) -> GameResult<()> {
        let desync = || GameError::EngineDesync {
            rules: format!("accepted {}", played.candidate()),
            opponent: PositionKey::of(&self.position).to_string(),
        };
        let mv = find_legal_move(
            &self.position,
            played.source,
            played.target,
            played.promotion,
        )
        .ok_or_else(desync)?;
        self.position = self.position.clone().play(mv).map_err(|_| desync())?;
        Ok(())
    }

    fn position_key(&self) -> PositionKey {
        PositionKey::of(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::engine::rules::{position_from_fen, RulesEngine, ShakmatyRules};
    use shakmaty::Square;

    fn opponent(fen: &str) -> GreedyOpponent {
        GreedyOpponent::new(position_from_fen(Some(fen)).unwrap(), Some(7))
    }

    #[test]
    fn test_medium_takes_the_queen() {
        //! A hanging queen beats a hanging pawn
        let mut ai = opponent("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
        let pick = ai.select_move(Difficulty::Medium).unwrap();
        assert_eq!(pick, MoveCandidate::new(Square::E4, Square::D5));
    }

    #[test]
    fn test_mate_in_one_preferred() {
        let mut ai = opponent("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let pick = ai.select_move(Difficulty::Medium).unwrap();
        assert_eq!(pick, MoveCandidate::new(Square::A1, Square::A8));
    }

    #[test]
    fn test_hard_avoids_pawn_recapture() {
        //! Queen takes a defended pawn on d5 only on Medium
        let fen = "4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1";
        let mut medium = opponent(fen);
        assert_eq!(
            medium.select_move(Difficulty::Medium).unwrap(),
            MoveCandidate::new(Square::D1, Square::D5)
        );

        let mut hard = opponent(fen);
        let pick = hard.select_move(Difficulty::Hard).unwrap();
        assert_ne!(pick.target, Square::D5);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = GreedyOpponent::new(Chess::default(), Some(42));
        let mut b = GreedyOpponent::new(Chess::default(), Some(42));
        assert_eq!(a.select_move(Difficulty::Easy), b.select_move(Difficulty::Easy));
    }

    #[test]
    fn test_observe_tracks_position() {
        let mut ai = GreedyOpponent::new(Chess::default(), Some(1));
        let mut rules = ShakmatyRules::default();

        let played = rules.submit_move(Square::G1, Square::F3, None).unwrap();
        ai.observe(&played).unwrap();
        assert_eq!(ai.position_key(), rules.position_key());
    }

    #[test]
    fn test_observe_rejects_foreign_move() {
        //! A reply to a move the opponent never saw is a desync
        let mut ai = GreedyOpponent::new(Chess::default(), Some(1));
        let mut rules = ShakmatyRules::default();
        rules.submit_move(Square::E2, Square::E4, None).unwrap();
        let reply = rules.submit_move(Square::E7, Square::E5, None).unwrap();

        assert!(matches!(
            ai.observe(&reply),
            Err(GameError::EngineDesync { .. })
        ));
    }

    #[test]
    fn test_no_moves_no_candidate() {
        let mut ai = opponent("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(ai.select_move(Difficulty::Hard), None);
    }
}
