//! Match outcome
//!
//! Every terminal state of a match, including the non-chess ones (flag fall
//! and an aborted match after an engine desync).

use crate::game::types::Side;

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchOutcome {
    #[default]
    Playing,
    Checkmate { winner: Side },
    Stalemate,
    InsufficientMaterial,
    Timeout { winner: Side },
    /// Engines or scene disagreed; the match cannot continue
    Aborted,
}

impl MatchOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchOutcome::Playing)
    }

    pub fn message(&self) -> String {
        match self {
            MatchOutcome::Playing => "Game in progress".to_string(),
            MatchOutcome::Checkmate { winner } => format!("{winner} wins by checkmate!"),
            MatchOutcome::Stalemate => "Draw by stalemate".to_string(),
            MatchOutcome::InsufficientMaterial => "Draw by insufficient material".to_string(),
            MatchOutcome::Timeout { winner } => format!("{winner} wins on time!"),
            MatchOutcome::Aborted => "Match aborted".to_string(),
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchOutcome::Checkmate { winner } | MatchOutcome::Timeout { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, MatchOutcome::Stalemate | MatchOutcome::InsufficientMaterial)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, MatchOutcome::Timeout { .. })
    }
}
