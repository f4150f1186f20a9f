//! Shared fixtures for integration tests
//!
//! [`Harness`] owns a bare `World`, the piece registry and a session, and
//! lends a [`WorldScene`] to every call so tests read like board clicks.
//! [`ScriptedOpponent`] replays a fixed list of replies.

#![allow(dead_code)]

use chess3d::core::MatchConfig;
use chess3d::game::ai::{DecisionEngine, Difficulty};
use chess3d::game::engine::rules::{find_legal_move, position_from_fen, ShakmatyRules};
use chess3d::game::engine::PositionKey;
use chess3d::game::error::{GameError, GameResult};
use chess3d::game::resources::{PieceRegistry, WorldScene};
use chess3d::game::session::{MatchSession, MoveOutcome};
use chess3d::game::types::{MoveCandidate, MoveResult, PieceKind, Side};
use bevy::prelude::*;
use shakmaty::{Chess, Position, Square};
use std::collections::VecDeque;

/// Opponent that plays a fixed list of moves, then nothing
pub struct ScriptedOpponent {
    position: Chess,
    script: VecDeque<MoveCandidate>,
}

impl ScriptedOpponent {
    pub fn new(position: Chess, script: &[(Square, Square)]) -> Self {
        Self {
            position,
            script: script
                .iter()
                .map(|&(source, target)| MoveCandidate::new(source, target))
                .collect(),
        }
    }
}

impl DecisionEngine for ScriptedOpponent {
    fn select_move(&mut self, _difficulty: Difficulty) -> Option<MoveCandidate> {
        self.script.pop_front()
    }

    fn observe(&mut self, played: &MoveResult) -> GameResult<()> {
        let mv = find_legal_move(&self.position, played.source, played.target, played.promotion)
            .ok_or(GameError::OpponentStalled)?;
        self.position = self
            .position
            .clone()
            .play(mv)
            .map_err(|_| GameError::OpponentStalled)?;
        Ok(())
    }

    fn position_key(&self) -> PositionKey {
        PositionKey::of(&self.position)
    }
}

/// Opponent that never updates its position
pub struct ForgetfulOpponent {
    position: Chess,
}

impl ForgetfulOpponent {
    pub fn new(position: Chess) -> Self {
        Self { position }
    }
}

impl DecisionEngine for ForgetfulOpponent {
    fn select_move(&mut self, _difficulty: Difficulty) -> Option<MoveCandidate> {
        None
    }

    fn observe(&mut self, _played: &MoveResult) -> GameResult<()> {
        Ok(())
    }

    fn position_key(&self) -> PositionKey {
        PositionKey::of(&self.position)
    }
}

pub fn config(human_side: Side, fen: Option<&str>) -> MatchConfig {
    MatchConfig {
        human_side,
        seed: Some(5),
        starting_fen: fen.map(str::to_string),
        ..default()
    }
}

pub struct Harness {
    pub world: World,
    pub registry: PieceRegistry,
    pub session: MatchSession,
}

impl Harness {
    /// Built-in engines, match already begun
    pub fn new(config: &MatchConfig) -> Self {
        let session = MatchSession::new(config).expect("valid config");
        Self::begin(session)
    }

    /// Scripted opponent replies, match already begun
    pub fn scripted(config: &MatchConfig, script: &[(Square, Square)]) -> Self {
        let position = position_from_fen(config.starting_fen.as_deref()).expect("valid fen");
        let opponent = ScriptedOpponent::new(position.clone(), script);
        let session = MatchSession::with_engines(
            config,
            Box::new(ShakmatyRules::new(position)),
            Box::new(opponent),
        );
        Self::begin(session)
    }

    pub fn with_opponent(config: &MatchConfig, opponent: Box<dyn DecisionEngine>) -> Self {
        let position = position_from_fen(config.starting_fen.as_deref()).expect("valid fen");
        let session =
            MatchSession::with_engines(config, Box::new(ShakmatyRules::new(position)), opponent);
        Self::begin(session)
    }

    fn begin(mut session: MatchSession) -> Self {
        let mut world = World::new();
        let mut registry = PieceRegistry::default();
        let mut scene = WorldScene::new(&mut world);
        session.populate(&mut registry, &mut scene);
        session.begin(&mut registry, &mut scene);
        Self {
            world,
            registry,
            session,
        }
    }

    pub fn click(&mut self, square: Square) -> MoveOutcome {
        let mut scene = WorldScene::new(&mut self.world);
        self.session.select_square(square, &mut self.registry, &mut scene)
    }

    /// Click the source, then the target
    pub fn play(&mut self, source: Square, target: Square) -> MoveOutcome {
        self.click(source);
        self.click(target)
    }

    pub fn attempt(&mut self, source: Square, target: Square) -> MoveOutcome {
        let mut scene = WorldScene::new(&mut self.world);
        self.session
            .attempt_move(source, target, &mut self.registry, &mut scene)
    }

    pub fn promote(&mut self, kind: PieceKind) -> MoveOutcome {
        let mut scene = WorldScene::new(&mut self.world);
        self.session
            .choose_promotion(kind, &mut self.registry, &mut scene)
    }

    pub fn restart(&mut self, config: &MatchConfig) -> GameResult<Option<MoveResult>> {
        let mut scene = WorldScene::new(&mut self.world);
        self.session.restart(config, &mut self.registry, &mut scene)
    }

    /// Kind and side of the registered piece on `square`
    pub fn piece_on(&self, square: Square) -> Option<(PieceKind, Side)> {
        self.registry
            .find_piece_at(square)
            .map(|(_, piece)| (piece.kind, piece.side))
    }

    /// Scene matches the rules engine square for square
    pub fn assert_in_sync(&mut self) {
        self.session
            .verify_scene(&self.registry)
            .expect("scene and rules engine agree");
        let tagged = self.piece_entities();
        assert_eq!(self.registry.len(), tagged);
    }

    /// Entities carrying a `Piece` tag in the world
    pub fn piece_entities(&mut self) -> usize {
        self.world
            .query::<&chess3d::game::components::Piece>()
            .iter(&self.world)
            .count()
    }
}
