//! Promotion picker messages into the match session

use super::params::BoardAccess;
use crate::game::events::{PromotionCancelled, PromotionChosen};
use crate::game::session::MoveOutcome;
use bevy::prelude::*;

pub fn handle_promotion_choice(
    mut choices: MessageReader<PromotionChosen>,
    mut cancels: MessageReader<PromotionCancelled>,
    mut board: BoardAccess,
) {
    for message in choices.read() {
        let outcome = board.with_scene(|session, registry, scene| {
            session.choose_promotion(message.kind, registry, scene)
        });
        if let MoveOutcome::Rejected(e) = outcome {
            warn!("[PROMOTION] {}", e);
        }
    }

    for _ in cancels.read() {
        if let MoveOutcome::Rejected(e) = board.session.cancel_promotion() {
            warn!("[PROMOTION] {}", e);
        }
    }
}
