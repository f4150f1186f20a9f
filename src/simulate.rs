//! Headless self-play
//!
//! Plays a match with no window: the configured opponent engine plays its
//! side as usual, and a second [`GreedyOpponent`] stands in for the human,
//! feeding its picks through the same `attempt_move` / `choose_promotion`
//! entry points pointer input uses. Pieces live in a bare [`World`] through
//! [`WorldScene`], and the square/entity mapping is checked against the rules
//! engine after every half-move.

use crate::core::config::MatchConfig;
use crate::game::ai::{DecisionEngine, GreedyOpponent};
use crate::game::engine::rules::position_from_fen;
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{MatchOutcome, PieceRegistry, WorldScene};
use crate::game::session::{MatchSession, MoveOutcome};
use crate::game::types::PieceKind;
use bevy::prelude::*;

/// What a finished simulation looked like
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Half-moves on the board
    pub plies: usize,
    pub outcome: MatchOutcome,
    /// Final position as the rules engine sees it
    pub position: String,
    pub moves: Vec<String>,
    pub pieces_left: usize,
}

/// Play up to `max_plies` half-moves, or until the match ends
///
/// Any scene/rules mismatch, a refused move from either driver, or an aborted
/// match is returned as the error that caused it.
pub fn run_simulation(config: &MatchConfig, max_plies: usize) -> GameResult<SimulationReport> {
    let mut world = World::new();
    let mut registry = PieceRegistry::default();
    let mut session = MatchSession::new(config)?;

    let position = position_from_fen(config.starting_fen.as_deref())
        .map_err(|message| GameError::InvalidPosition { message })?;
    // Different seed from the opponent so the two sides don't mirror each other
    let mut stand_in = GreedyOpponent::new(position, config.seed.map(|seed| seed.wrapping_add(1)));

    let mut scene = WorldScene::new(&mut world);
    session.populate(&mut registry, &mut scene);
    let opening = session.begin(&mut registry, &mut scene);
    check_abort(&session)?;
    if let Some(reply) = opening {
        stand_in.observe(&reply)?;
    }
    session.verify_scene(&registry)?;

    while session.history().len() < max_plies && !session.outcome().is_over() {
        let Some(candidate) = stand_in.select_move(config.difficulty) else {
            return Err(GameError::OpponentStalled);
        };

        let mut outcome =
            session.attempt_move(candidate.source, candidate.target, &mut registry, &mut scene);
        if let MoveOutcome::AwaitingPromotion(_) = outcome {
            let kind = candidate.promotion.unwrap_or(PieceKind::Queen);
            outcome = session.choose_promotion(kind, &mut registry, &mut scene);
        }

        match outcome {
            MoveOutcome::Committed { result, reply } => {
                stand_in.observe(&result)?;
                if let Some(reply) = reply {
                    stand_in.observe(&reply)?;
                }
            }
            MoveOutcome::Rejected(e) | MoveOutcome::Aborted(e) => return Err(e),
            other => {
                warn!("[MATCH] Simulation got {:?} for {}", other, candidate);
                return Err(GameError::OpponentStalled);
            }
        }

        check_abort(&session)?;
        session.verify_scene(&registry)?;
        debug!(
            "[MATCH] Ply {}: {}",
            session.history().len(),
            session.history().last_move().map(|m| m.notation.as_str()).unwrap_or("-")
        );
    }

    let report = SimulationReport {
        plies: session.history().len(),
        outcome: session.outcome(),
        position: session.rules().position_key().to_string(),
        moves: session.history().lines(),
        pieces_left: registry.len(),
    };
    info!(
        "[MATCH] Simulation finished after {} plies: {}",
        report.plies,
        report.outcome.message()
    );
    Ok(report)
}

/// Surface an aborted match as its diagnostic
fn check_abort(session: &MatchSession) -> GameResult<()> {
    if session.outcome() == MatchOutcome::Aborted {
        let detail = session.diagnostic().unwrap_or("match aborted").to_string();
        return Err(GameError::EngineDesync {
            rules: session.rules().position_key().to_string(),
            opponent: detail,
        });
    }
    Ok(())
}
