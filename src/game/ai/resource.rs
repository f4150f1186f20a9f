//! Opponent strength settings
//!
//! The opponent engine is a one-ply greedy player. Difficulty decides how much
//! of the position it looks at:
//!
//! | Difficulty | Move choice                                              |
//! |------------|----------------------------------------------------------|
//! | Easy       | Uniformly random legal move                              |
//! | Medium     | Highest-value capture, mate-in-one first, random fallback |
//! | Hard       | Medium, minus moves that hang the moved piece to a cheaper one |
//!
//! Ties are broken by the engine's seeded RNG so simulations are reproducible.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opponent difficulty
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (random moves)",
            Difficulty::Medium => "Medium (greedy captures)",
            Difficulty::Hard => "Hard (greedy, avoids hanging pieces)",
        }
    }

    /// Whether the engine scores captures at all
    pub fn is_greedy(self) -> bool {
        !matches!(self, Difficulty::Easy)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}
