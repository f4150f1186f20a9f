//! Pointer messages into the match session
//!
//! Runs the whole resolution for each message, including the automated
//! reply, before the next message is read.

use super::params::BoardAccess;
use crate::game::events::{MoveAttempted, SquareSelected};
use crate::game::session::MoveOutcome;
use bevy::prelude::*;

pub fn handle_square_selected(
    mut selections: MessageReader<SquareSelected>,
    mut board: BoardAccess,
) {
    for message in selections.read() {
        let outcome = board.with_scene(|session, registry, scene| {
            session.select_square(message.square, registry, scene)
        });
        log_outcome(&outcome);
    }
}

pub fn handle_move_attempted(mut attempts: MessageReader<MoveAttempted>, mut board: BoardAccess) {
    for message in attempts.read() {
        let outcome = board.with_scene(|session, registry, scene| {
            session.attempt_move(message.source, message.target, registry, scene)
        });
        log_outcome(&outcome);
    }
}

fn log_outcome(outcome: &MoveOutcome) {
    match outcome {
        MoveOutcome::Rejected(e) => debug!("[INPUT] {}", e),
        MoveOutcome::Aborted(e) => error!("[INPUT] Match aborted: {}", e),
        MoveOutcome::Committed {
            reply: Some(reply), ..
        } => debug!("[INPUT] Opponent answered {}", reply.candidate()),
        _ => {}
    }
}
