//! Lockstep application of half-moves to both engines
//!
//! Every committed half-move goes through [`EnginePair::play`]: the rules
//! engine validates it, the opponent engine mirrors the accepted result, and
//! the two position keys are compared before the move counts as committed.

use super::rules::RulesEngine;
use crate::game::ai::{DecisionEngine, Difficulty};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{MoveCandidate, MoveResult};
use bevy::prelude::*;

/// What [`EnginePair::play`] did with a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Played {
    /// Pawn reached the last rank on the interactive path; the rules engine
    /// was rolled back and the move waits for a promotion choice
    Held(MoveResult),
    /// Applied to both engines
    Committed(MoveResult),
}

/// The rules engine and the opponent engine of one match
pub struct EnginePair {
    rules: Box<dyn RulesEngine>,
    opponent: Box<dyn DecisionEngine>,
}

impl EnginePair {
    pub fn new(rules: Box<dyn RulesEngine>, opponent: Box<dyn DecisionEngine>) -> Self {
        Self { rules, opponent }
    }

    pub fn rules(&self) -> &dyn RulesEngine {
        self.rules.as_ref()
    }

    /// Submit `candidate` and, unless it is held for promotion, mirror it on the opponent
    pub fn play(&mut self, candidate: &MoveCandidate, hold_promotion: bool) -> GameResult<Played> {
        let result =
            self.rules
                .submit_move(candidate.source, candidate.target, candidate.promotion)?;

        if hold_promotion && candidate.promotion.is_none() && result.is_promotion_candidate() {
            self.rules.undo_last_move()?;
            return Ok(Played::Held(result));
        }

        self.opponent.observe(&result)?;
        self.verify()?;
        Ok(Played::Committed(result))
    }

    /// Ask the opponent for a move; only meaningful on the automated side's turn
    pub fn select_reply(&mut self, difficulty: Difficulty) -> Option<MoveCandidate> {
        self.opponent.select_move(difficulty)
    }

    /// Both engines must describe the same position
    pub fn verify(&self) -> GameResult<()> {
        let rules = self.rules.position_key();
        let opponent = self.opponent.position_key();
        if rules != opponent {
            error!("[MOVE] Engine desync: rules {} / opponent {}", rules, opponent);
            return Err(GameError::EngineDesync {
                rules: rules.to_string(),
                opponent: opponent.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::GreedyOpponent;
    use crate::game::engine::rules::{position_from_fen, ShakmatyRules};
    use crate::game::types::PieceKind;
    use shakmaty::Square;

    fn pair(fen: &str) -> EnginePair {
        let position = position_from_fen(Some(fen)).unwrap();
        EnginePair::new(
            Box::new(ShakmatyRules::new(position.clone())),
            Box::new(GreedyOpponent::new(position, Some(3))),
        )
    }

    #[test]
    fn test_commit_keeps_engines_in_step() {
        let mut engines = pair("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let played = engines
            .play(&MoveCandidate::new(Square::E2, Square::E4), true)
            .unwrap();
        assert!(matches!(played, Played::Committed(_)));
        assert!(engines.verify().is_ok());
    }

    #[test]
    fn test_rollback_is_idempotent() {
        //! Undo then re-submit reproduces the held result exactly
        let mut engines = pair("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let before = engines.rules().position_key();
        let candidate = MoveCandidate::new(Square::A7, Square::A8);

        let Played::Held(held) = engines.play(&candidate, true).unwrap() else {
            panic!("promotion should be held");
        };
        assert_eq!(engines.rules().position_key(), before);
        assert_eq!(engines.rules().current_turn(), crate::game::types::Side::White);

        let Played::Held(again) = engines.play(&candidate, true).unwrap() else {
            panic!("promotion should be held");
        };
        assert_eq!(held, again);

        let Played::Committed(rook) = engines
            .play(&candidate.with_promotion(PieceKind::Rook), true)
            .unwrap()
        else {
            panic!("explicit promotion commits");
        };
        assert_eq!(rook.promotion, Some(PieceKind::Rook));
        assert!(engines.verify().is_ok());
    }

    #[test]
    fn test_illegal_candidate_leaves_engines_untouched() {
        let mut engines = pair("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        let before = engines.rules().position_key();
        let err = engines
            .play(&MoveCandidate::new(Square::E2, Square::E5), false)
            .unwrap_err();
        assert!(matches!(err, GameError::Illegal(_)));
        assert_eq!(engines.rules().position_key(), before);
    }
}
