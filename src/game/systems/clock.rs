//! Clock ticking

use crate::game::session::MatchSession;
use bevy::prelude::*;

/// Run the side-to-move's clock down by the frame time
///
/// Ticking alone does not mark the session changed; a flag fall does.
pub fn tick_match_clock(time: Res<Time>, mut session: ResMut<MatchSession>) {
    if session.clock().running.is_none() {
        return;
    }
    if let Some(outcome) = session.bypass_change_detection().tick_clock(time.delta_secs()) {
        debug!("[CLOCK] {}", outcome.message());
        session.set_changed();
    }
}
