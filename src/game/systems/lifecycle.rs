//! Match start and notice fan-out

use super::params::BoardAccess;
use crate::core::config::MatchConfig;
use crate::game::events::{MatchNotice, StartMatch};
use crate::game::session::MatchSession;
use bevy::prelude::*;

/// Ask for the first match once the app is up
pub fn request_first_match(mut start: MessageWriter<StartMatch>) {
    start.write(StartMatch);
}

/// Tear down the running match and build a new one from [`MatchConfig`]
///
/// Several `StartMatch` in one frame start a single match. An invalid
/// starting position keeps the running match; with no match on the board
/// yet the standard position is used instead.
pub fn start_match(
    mut requests: MessageReader<StartMatch>,
    config: Res<MatchConfig>,
    mut board: BoardAccess,
) {
    if requests.read().count() == 0 {
        return;
    }

    let restarted = board.with_scene(|session, registry, scene| {
        session.restart(&config, registry, scene)
    });
    let Err(e) = restarted else {
        return;
    };
    error!("[MATCH] Could not start a new match: {}", e);
    if !board.registry.is_empty() {
        return;
    }

    warn!("[MATCH] Falling back to the standard starting position");
    let standard = MatchConfig {
        starting_fen: None,
        ..(*config).clone()
    };
    let fallback = board.with_scene(|session, registry, scene| {
        session.restart(&standard, registry, scene)
    });
    if let Err(e) = fallback {
        error!("[MATCH] Could not start the fallback match: {}", e);
    }
}

/// Forward the session's notices as [`MatchNotice`] messages
pub fn flush_notices(mut session: ResMut<MatchSession>, mut notices: MessageWriter<MatchNotice>) {
    if !session.has_notices() {
        return;
    }
    for notice in session.drain_notices() {
        if let MatchNotice::TurnChanged(side) = notice {
            debug!("[TURN] Notice: {} to move", side);
        }
        notices.write(notice);
    }
}
