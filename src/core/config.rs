//! Match configuration
//!
//! [`MatchConfig`] is what a new match is built from. It is loaded once at
//! startup (see [`crate::core::settings_persistence`]), can be overridden from
//! the command line and is re-read by every `StartMatch`.

use crate::game::ai::Difficulty;
use crate::game::types::Side;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings for one match
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Side controlled by pointer input; the opponent engine plays the other
    pub human_side: Side,
    pub difficulty: Difficulty,
    /// Starting time per side in seconds
    pub clock_seconds: u32,
    /// Fischer increment in seconds
    pub increment_seconds: u32,
    /// Fixed seed for the opponent's RNG
    pub seed: Option<u64>,
    /// Custom starting position; standard start when absent
    pub starting_fen: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            human_side: Side::White,
            difficulty: Difficulty::Medium,
            clock_seconds: 600,
            increment_seconds: 0,
            seed: None,
            starting_fen: None,
        }
    }
}

impl MatchConfig {
    pub fn opponent_side(&self) -> Side {
        self.human_side.opponent()
    }

    /// Short "10+5" style label for the HUD
    pub fn time_control(&self) -> String {
        format!("{}+{}", self.clock_seconds / 60, self.increment_seconds)
    }
}
