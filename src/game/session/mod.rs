//! Match session - the one object that owns a match
//!
//! [`MatchSession`] holds both engines, the turn, the clocks, the selection,
//! the pending promotion and the last landing square. Starting a new match
//! replaces the whole value, so nothing from the previous match survives.
//!
//! The session does not own piece entities. Every call that changes the board
//! takes the [`PieceRegistry`] and a [`PieceScene`] so the same logic drives
//! the rendered scene, a headless `World` and the tests.
//!
//! # Flow
//!
//! ```text
//! select_square / attempt_move
//!     └─ EnginePair::play ── illegal ──> Rejected (selection cleared)
//!          ├─ Held (pawn on last rank) ──> AwaitingPromotion
//!          └─ Committed ──> mutations ──> turn + clock hand-over
//!                               └─ automated side to move? ──> reply, same call
//! ```
//!
//! Fatal errors (engine or scene desync) end the match as
//! [`MatchOutcome::Aborted`] and keep the message in [`MatchSession::diagnostic`].

mod resolver;

use crate::core::config::MatchConfig;
use crate::game::ai::{DecisionEngine, GreedyOpponent};
use crate::game::engine::rules::{position_from_fen, RulesEngine, ShakmatyRules};
use crate::game::engine::{EnginePair, GameStatus};
use crate::game::error::{GameError, GameResult};
use crate::game::events::MatchNotice;
use crate::game::resources::{
    CapturedPieces, CurrentTurn, MatchClock, MatchOutcome, MoveHistory, PendingPromotion,
    PieceRegistry, PieceScene, Selection, TurnState,
};
use crate::game::square::all_squares;
use crate::game::types::MoveResult;
use bevy::prelude::*;
use shakmaty::{Chess, Square};

/// Result of feeding one input into the session
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// A piece was selected; its legal targets are in the selection
    Selected(Square),
    Deselected,
    /// The move (and the automated reply, if one was due) is on the board
    Committed {
        result: MoveResult,
        reply: Option<MoveResult>,
    },
    /// Pawn reached the last rank; waiting for a promotion choice
    AwaitingPromotion(Square),
    PromotionCancelled,
    /// Expected refusal; nothing changed apart from the selection
    Rejected(GameError),
    /// Input that has no meaning in the current state
    Ignored,
    /// Fatal error; the match is over
    Aborted(GameError),
}

impl MoveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed { .. })
    }
}

#[derive(Resource)]
pub struct MatchSession {
    engines: EnginePair,
    config: MatchConfig,
    turn: CurrentTurn,
    selection: Selection,
    pending_promotion: Option<PendingPromotion>,
    last_landing: Option<Square>,
    clock: MatchClock,
    outcome: MatchOutcome,
    diagnostic: Option<String>,
    history: MoveHistory,
    captured: CapturedPieces,
    notices: Vec<MatchNotice>,
}

impl MatchSession {
    /// Session for `config` with the built-in engines
    pub fn new(config: &MatchConfig) -> GameResult<Self> {
        let position = position_from_fen(config.starting_fen.as_deref())
            .map_err(|message| GameError::InvalidPosition { message })?;
        Ok(Self::from_position(config, position))
    }

    fn from_position(config: &MatchConfig, position: Chess) -> Self {
        let opponent = GreedyOpponent::new(position.clone(), config.seed);
        Self::with_engines(config, Box::new(ShakmatyRules::new(position)), Box::new(opponent))
    }

    /// Session with caller-provided engines; both must start from the same position
    pub fn with_engines(
        config: &MatchConfig,
        rules: Box<dyn RulesEngine>,
        opponent: Box<dyn DecisionEngine>,
    ) -> Self {
        let turn = CurrentTurn::new(rules.current_turn());
        Self {
            engines: EnginePair::new(rules, opponent),
            config: config.clone(),
            turn,
            selection: Selection::default(),
            pending_promotion: None,
            last_landing: None,
            clock: MatchClock::new(config.clock_seconds as f32, config.increment_seconds as f32),
            outcome: MatchOutcome::Playing,
            diagnostic: None,
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
            notices: Vec::new(),
        }
    }

    /// Spawn one entity per occupied square of the starting position
    pub fn populate(&self, registry: &mut PieceRegistry, scene: &mut dyn PieceScene) {
        for square in all_squares() {
            if let Some((kind, side)) = self.engines.rules().piece_at(square) {
                registry.spawn(kind, side, square, scene);
            }
        }
        info!("[MATCH] Placed {} pieces", registry.len());
    }

    /// Start the clock of the side to move
    ///
    /// When the automated side moves first its reply is played here.
    pub fn begin(
        &mut self,
        registry: &mut PieceRegistry,
        scene: &mut dyn PieceScene,
    ) -> Option<MoveResult> {
        info!(
            "[MATCH] New match: human plays {}, opponent {} ({}), {}",
            self.config.human_side,
            self.config.opponent_side(),
            self.config.difficulty,
            self.config.time_control()
        );
        if let Err(e) = self.engines.verify() {
            self.abort(e);
            return None;
        }

        self.clock.start(self.turn.side);
        self.notices.push(MatchNotice::TurnChanged(self.turn.side));
        self.check_game_over();
        if self.outcome.is_over() || self.turn_state() == TurnState::HumanToMove {
            return None;
        }

        match self.play_automated(registry, scene) {
            Ok(reply) => Some(reply),
            Err(e) => {
                self.abort(e);
                None
            }
        }
    }

    /// Replace this session with a fresh one built from `config`
    ///
    /// On an invalid config the running match is left untouched.
    pub fn restart(
        &mut self,
        config: &MatchConfig,
        registry: &mut PieceRegistry,
        scene: &mut dyn PieceScene,
    ) -> GameResult<Option<MoveResult>> {
        let fresh = MatchSession::new(config)?;
        self.clock.stop();
        registry.clear(scene);
        *self = fresh;
        self.populate(registry, scene);
        Ok(self.begin(registry, scene))
    }

    /// Advance the clock; returns the outcome when a flag falls
    pub fn tick_clock(&mut self, delta_seconds: f32) -> Option<MatchOutcome> {
        if self.outcome.is_over() {
            return None;
        }
        let flagged = self.clock.tick(delta_seconds)?;
        self.end(MatchOutcome::Timeout {
            winner: flagged.opponent(),
        });
        Some(self.outcome)
    }

    pub fn turn_state(&self) -> TurnState {
        TurnState::for_side(self.turn.side, self.config.human_side)
    }

    pub fn turn(&self) -> CurrentTurn {
        self.turn
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending_promotion.as_ref()
    }

    pub fn last_landing(&self) -> Option<Square> {
        self.last_landing
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Message of the error that aborted the match
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn rules(&self) -> &dyn RulesEngine {
        self.engines.rules()
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Notices produced since the last call
    pub fn drain_notices(&mut self) -> Vec<MatchNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Scene and rules engine agree on every square
    pub fn verify_scene(&self, registry: &PieceRegistry) -> GameResult<()> {
        if !registry.is_consistent() {
            return Err(GameError::SceneDesync {
                square: Square::A1,
                detail: "square index out of step with piece tags".to_string(),
            });
        }
        for square in all_squares() {
            let expected = self.engines.rules().piece_at(square);
            let actual = registry
                .find_piece_at(square)
                .map(|(_, piece)| (piece.kind, piece.side));
            if expected != actual {
                return Err(GameError::SceneDesync {
                    square,
                    detail: format!("rules engine has {expected:?}, scene has {actual:?}"),
                });
            }
        }
        Ok(())
    }

    fn check_game_over(&mut self) {
        let outcome = match self.engines.rules().status() {
            GameStatus::Ongoing => return,
            GameStatus::Checkmate { winner } => MatchOutcome::Checkmate { winner },
            GameStatus::Stalemate => MatchOutcome::Stalemate,
            GameStatus::InsufficientMaterial => MatchOutcome::InsufficientMaterial,
        };
        self.end(outcome);
    }

    fn end(&mut self, outcome: MatchOutcome) {
        self.outcome = outcome;
        self.clock.stop();
        self.selection.clear();
        self.pending_promotion = None;
        self.notices.push(MatchNotice::MatchEnded(outcome));
        info!("[MATCH] {} (move {})", outcome.message(), self.turn.move_number);
    }

    fn abort(&mut self, error: GameError) {
        error!("[MATCH] Aborting match: {}", error);
        self.diagnostic = Some(error.to_string());
        self.end(MatchOutcome::Aborted);
    }
}

impl FromWorld for MatchSession {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<MatchConfig>()
            .cloned()
            .unwrap_or_default();
        match MatchSession::new(&config) {
            Ok(session) => session,
            Err(e) => {
                error!("[CONFIG] {}; starting from the standard position", e);
                MatchSession::from_position(&config, Chess::default())
            }
        }
    }
}
