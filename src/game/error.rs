//! Error types for game module
//!
//! [`LegalityError`] is the expected, recoverable rejection reported by the
//! rules engine. [`GameError`] covers everything the move resolver can run
//! into; only the desync variants are fatal to a match.

use bevy::prelude::Entity;
use shakmaty::Square;

/// Why the rules engine refused a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalityReason {
    /// The source square is empty or holds the wrong side's piece
    NoPiece,
    /// No legal move connects source and target
    Illegal,
    /// Undo was requested with no move on the stack
    NothingToUndo,
}

/// A candidate move rejected by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal move {from}{to}: {reason:?}")]
pub struct LegalityError {
    pub from: Square,
    pub to: Square,
    pub reason: LegalityReason,
}

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// Rejected by the rules engine
    #[error(transparent)]
    Illegal(#[from] LegalityError),

    /// The selection points at a square that no longer hosts the expected piece
    #[error("Stale selection: no matching piece on {square}")]
    StaleSelection { square: Square },

    /// Rules engine and opponent engine describe different positions
    #[error("Engine desync: rules engine has {rules}, opponent engine has {opponent}")]
    EngineDesync { rules: String, opponent: String },

    /// The scene no longer mirrors the rules engine
    #[error("Scene desync on {square}: {detail}")]
    SceneDesync { square: Square, detail: String },

    /// A scene mutation referenced an empty square
    #[error("No piece entity on {square}")]
    MissingEntity { square: Square },

    /// Registry was asked about an entity it does not own
    #[error("Entity {entity:?} is not a registered piece")]
    UnknownEntity { entity: Entity },

    /// A promotion choice arrived with nothing pending
    #[error("No promotion is pending")]
    NoPendingPromotion,

    /// Board input arrived while the promotion picker is open
    #[error("Promotion pending on {square}")]
    PromotionPending { square: Square },

    /// Kind outside queen/rook/bishop/knight
    #[error("Cannot promote to {kind:?}")]
    InvalidPromotion { kind: crate::game::types::PieceKind },

    /// Input after the match ended
    #[error("The match is over")]
    MatchOver,

    /// Opponent produced no move although the rules engine says play continues
    #[error("Opponent engine returned no move")]
    OpponentStalled,

    /// Starting position could not be built
    #[error("Invalid starting position: {message}")]
    InvalidPosition { message: String },
}

impl GameError {
    /// Expected conditions that only clear the selection
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::Illegal(_)
                | GameError::StaleSelection { .. }
                | GameError::NoPendingPromotion
                | GameError::PromotionPending { .. }
                | GameError::InvalidPromotion { .. }
                | GameError::MatchOver
        )
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
