//! Turn tracking
//!
//! [`CurrentTurn`] is flipped exactly once per committed half-move, right
//! after the move result has been applied to the scene. [`TurnState`] is the
//! same information seen from the match's point of view: is the human or the
//! opponent engine to move.

use crate::game::types::Side;

/// Side to move and full-move counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurn {
    pub side: Side,
    /// Starts at 1, incremented after Black moves
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self::new(Side::White)
    }
}

impl CurrentTurn {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            move_number: 1,
        }
    }

    /// Hand the move to the other side
    pub fn switch(&mut self) {
        if self.side == Side::Black {
            self.move_number += 1;
        }
        self.side = self.side.opponent();
    }
}

/// Who acts next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    HumanToMove,
    AutomatedToMove,
}

impl TurnState {
    pub fn for_side(to_move: Side, human: Side) -> Self {
        if to_move == human {
            TurnState::HumanToMove
        } else {
            TurnState::AutomatedToMove
        }
    }
}
