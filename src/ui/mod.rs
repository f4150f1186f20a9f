//! UI module - egui match HUD
//!
//! - **hud**: clocks, status, move list, material and next-match settings
//! - **promotion**: modal promotion picker
//!
//! Both systems run in `EguiPrimaryContextPass` and only read the
//! [`crate::game::session::MatchSession`]; player choices leave as messages.

pub mod hud;
pub mod promotion;
pub mod styles;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use hud::{format_time, match_hud_system};
pub use promotion::promotion_picker_system;

/// Requires `EguiPlugin` and `GamePlugin`
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (match_hud_system, promotion_picker_system).chain(),
        );
    }
}
