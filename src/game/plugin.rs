//! Game plugin - messages, match state and system ordering
//!
//! Registers the inbound messages (`SquareSelected`, `MoveAttempted`,
//! `PromotionChosen`, `PromotionCancelled`, `StartMatch`) and the outbound
//! `MatchNotice`, the [`MatchConfig`], [`MatchSession`] and [`PieceRegistry`]
//! resources, and the systems that connect them.
//!
//! Works under `MinimalPlugins`: without rendering, pieces are spawned as
//! tagged entities with a transform only.
//!
//! # System Organization
//!
//! ```text
//! Startup:  request_first_match
//! Update:   Lifecycle → Input → Execution → Clock → Visual
//! ```

use super::events::*;
use super::resources::PieceRegistry;
use super::session::MatchSession;
use super::system_sets::GameSystems;
use super::systems::*;
use super::types::{MoveClass, PieceKind, Side};
use crate::core::config::MatchConfig;
use crate::game::ai::Difficulty;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SquareSelected>()
            .add_message::<MoveAttempted>()
            .add_message::<PromotionChosen>()
            .add_message::<PromotionCancelled>()
            .add_message::<StartMatch>()
            .add_message::<MatchNotice>();

        // MatchConfig first: MatchSession is built from it
        app.init_resource::<MatchConfig>()
            .init_resource::<PieceRegistry>()
            .init_resource::<MatchSession>();

        app.register_type::<Side>()
            .register_type::<PieceKind>()
            .register_type::<MoveClass>()
            .register_type::<Difficulty>();

        app.configure_sets(
            Update,
            (
                GameSystems::Lifecycle,
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Clock,
                GameSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(Startup, request_first_match)
            .add_systems(Update, start_match.in_set(GameSystems::Lifecycle))
            .add_systems(
                Update,
                (handle_square_selected, handle_move_attempted)
                    .chain()
                    .in_set(GameSystems::Input),
            )
            .add_systems(
                Update,
                handle_promotion_choice.in_set(GameSystems::Execution),
            )
            .add_systems(Update, tick_match_clock.in_set(GameSystems::Clock))
            .add_systems(Update, flush_notices.in_set(GameSystems::Visual));
    }
}
