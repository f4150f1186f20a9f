//! Move resolver
//!
//! Interactive entry points never return a [`GameError`]; they report what
//! happened as a [`MoveOutcome`]. Internally everything propagates with `?`
//! and the entry point decides whether the error is recoverable or aborts
//! the match.

use super::{MatchSession, MoveOutcome};
use crate::game::engine::Played;
use crate::game::error::{GameError, GameResult};
use crate::game::events::MatchNotice;
use crate::game::mutation::{apply_mutations, mutations_for};
use crate::game::resources::{MoveRecord, PendingPromotion, PieceRegistry, PieceScene, TurnState};
use crate::game::types::{MoveCandidate, MoveResult, PieceKind};
use bevy::prelude::*;
use shakmaty::Square;

impl MatchSession {
    /// Board click: select, reselect, deselect, or move to the clicked square
    pub fn select_square(
        &mut self,
        square: Square,
        registry: &mut PieceRegistry,
        scene: &mut dyn PieceScene,
    ) -> MoveOutcome {
        if let Some(blocked) = self.input_blocked() {
            return blocked;
        }

        let own_piece = registry
            .find_piece_at(square)
            .filter(|(_, piece)| piece.side == self.turn.side);

        match (self.selection.selected_square, own_piece) {
            (Some(selected), _) if selected == square => {
                self.selection.clear();
                MoveOutcome::Deselected
            }
            (_, Some((entity, _))) => {
                let targets = self.engines.rules().legal_targets(square);
                debug!("[INPUT] Selected {} ({} legal targets)", square, targets.len());
                self.selection.select(entity, square, targets);
                MoveOutcome::Selected(square)
            }
            (Some(selected), None) => self.attempt_move(selected, square, registry, scene),
            (None, None) => MoveOutcome::Ignored,
        }
    }

    /// Resolve `source → target` for the interactive side
    pub fn attempt_move(
        &mut self,
        source: Square,
        target: Square,
        registry: &mut PieceRegistry,
        scene: &mut dyn PieceScene,
    ) -> MoveOutcome {
        if let Some(blocked) = self.input_blocked() {
            return blocked;
        }

        let Some((mover, _)) = registry.find_piece_at(source) else {
            debug!("[INPUT] Stale selection: nothing on {}", source);
            self.selection.clear();
            return MoveOutcome::Rejected(GameError::StaleSelection { square: source });
        };

        let candidate = MoveCandidate::new(source, target);
        match self.engines.play(&candidate, true) {
            Ok(Played::Held(held)) => {
                self.pending_promotion = Some(PendingPromotion {
                    source,
                    target,
                    pawn: mover,
                    side: held.side,
                    capture: held.captured,
                });
                self.selection.clear();
                self.notices.push(MatchNotice::PromotionPending(target));
                info!("[PROMOTION] {} pawn {} -> {} awaiting choice", held.side, source, target);
                MoveOutcome::AwaitingPromotion(target)
            }
            Ok(Played::Committed(result)) => self.commit_interactive(result, registry, scene),
            Err(e) => self.refuse(e),
        }
    }

    /// Complete the pending promotion with `kind`
    pub fn choose_promotion(
        &mut self,
        kind: PieceKind,
        registry: &mut PieceRegistry,
        scene: &mut dyn PieceScene,
    ) -> MoveOutcome {
        let Some(pending) = self.pending_promotion else {
            debug!("[PROMOTION] Choice {:?} with nothing pending", kind);
            return MoveOutcome::Rejected(GameError::NoPendingPromotion);
        };
        if !kind.is_promotion_choice() {
            return MoveOutcome::Rejected(GameError::InvalidPromotion { kind });
        }
        self.pending_promotion = None;

        if registry.find_piece_at(pending.source).map(|(e, _)| e) != Some(pending.pawn) {
            let error = GameError::SceneDesync {
                square: pending.source,
                detail: "promoting pawn left its square".to_string(),
            };
            self.abort(error.clone());
            return MoveOutcome::Aborted(error);
        }

        let candidate = MoveCandidate::new(pending.source, pending.target).with_promotion(kind);
        match self.engines.play(&candidate, false) {
            Ok(Played::Committed(result) | Played::Held(result)) => {
                info!("[PROMOTION] {} promotes on {} to {}", result.side, result.target, kind.name());
                self.commit_interactive(result, registry, scene)
            }
            Err(e) if e.is_recoverable() => {
                warn!("[PROMOTION] Promotion abandoned: {}", e);
                MoveOutcome::Rejected(e)
            }
            Err(e) => {
                self.abort(e.clone());
                MoveOutcome::Aborted(e)
            }
        }
    }

    /// Drop the pending promotion; the pawn stays on its source square
    pub fn cancel_promotion(&mut self) -> MoveOutcome {
        match self.pending_promotion.take() {
            Some(pending) => {
                info!("[PROMOTION] Cancelled {} -> {}", pending.source, pending.target);
                MoveOutcome::PromotionCancelled
            }
            None => MoveOutcome::Rejected(GameError::NoPendingPromotion),
        }
    }

    /// Gate for interactive input
    fn input_blocked(&self) -> Option<MoveOutcome> {
        if self.outcome.is_over() {
            return Some(MoveOutcome::Rejected(GameError::MatchOver));
        }
        if let Some(pending) = &self.pending_promotion {
            return Some(MoveOutcome::Rejected(GameError::PromotionPending {
                square: pending.target,
            }));
        }
        if self.turn_state() != TurnState::HumanToMove {
            return Some(MoveOutcome::Ignored);
        }
        None
    }

    fn refuse(&mut self, error: GameError) -> MoveOutcome {
        if error.is_recoverable() {
            debug!("[MOVE] Rejected: {}", error);
            self.selection.clear();
            MoveOutcome::Rejected(error)
        } else {
            self.abort(error.clone());
            MoveOutcome::Aborted(error)
        }
    }

    fn commit_interactive(
        &mut self,
        result: MoveResult,
        registry: &mut PieceRegistry,
        scene: &mut dyn PieceScene,
    ) -> MoveOutcome {
        let committed = self.apply_committed(result, registry, scene).and_then(|()| {
            if self.outcome.is_over() || self.turn_state() == TurnState::HumanToMove {
                Ok(None)
            } else {
                self.play_automated(registry, scene).map(Some)
            }
        });

        match committed {
            Ok(reply) => MoveOutcome::Committed { result, reply },
            Err(e) => {
                self.abort(e.clone());
                MoveOutcome::Aborted(e)
            }
        }
    }

    /// Ask the opponent for a move and commit it on the non-interactive path
    pub(super) fn play_automated(
        &mut self,
        registry: &mut PieceRegistry,
        scene: &mut dyn PieceScene,
    ) -> GameResult<MoveResult> {
        let candidate = self
            .engines
            .select_reply(self.config.difficulty)
            .ok_or(GameError::OpponentStalled)?;
        debug!("[AI] {} plays {}", self.turn.side, candidate);

        let (Played::Committed(result) | Played::Held(result)) =
            self.engines.play(&candidate, false)?;
        self.apply_committed(result, registry, scene)?;
        Ok(result)
    }

    /// Everything that follows a move both engines accepted
    fn apply_committed(
        &mut self,
        result: MoveResult,
        registry: &mut PieceRegistry,
        scene: &mut dyn PieceScene,
    ) -> GameResult<()> {
        let mutations = mutations_for(&result, self.last_landing)?;
        apply_mutations(registry, &mutations, scene)?;

        self.history
            .add_move(MoveRecord::from_result(&result, self.turn.move_number));
        if let Some(kind) = result.captured {
            self.captured.add_capture(result.side, kind);
        }
        self.last_landing = Some(result.target);
        self.selection.clear();

        self.turn.switch();
        let engine_turn = self.engines.rules().current_turn();
        if engine_turn != self.turn.side {
            return Err(GameError::EngineDesync {
                rules: format!("{engine_turn} to move"),
                opponent: format!("session has {} to move", self.turn.side),
            });
        }
        self.clock.hand_over(result.side);

        info!(
            "[MOVE] {} {} ({})",
            result.side,
            result.notation(),
            result.candidate()
        );
        info!(
            "[TURN] {} to move (move {})",
            self.turn.side, self.turn.move_number
        );
        self.notices.push(MatchNotice::TurnChanged(self.turn.side));

        self.verify_scene(registry)?;
        self.check_game_over();
        Ok(())
    }
}
