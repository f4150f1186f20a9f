//! Match clock with Fischer increment
//!
//! One countdown per side. Only the side to move loses time; handing the
//! move over pauses the mover's clock, credits the increment and starts the
//! opponent's clock in one step. A clock reaching zero flags its side.

use crate::game::types::Side;
use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchClock {
    /// White's remaining time in seconds
    pub white_time_left: f32,
    /// Black's remaining time in seconds
    pub black_time_left: f32,
    /// Added to the mover's clock after each committed move
    pub increment: f32,
    /// Side whose clock is running, if any
    pub running: Option<Side>,
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::new(600.0, 0.0)
    }
}

impl MatchClock {
    pub fn new(seconds: f32, increment: f32) -> Self {
        Self {
            white_time_left: seconds,
            black_time_left: seconds,
            increment,
            running: None,
        }
    }

    pub fn time_left(&self, side: Side) -> f32 {
        match side {
            Side::White => self.white_time_left,
            Side::Black => self.black_time_left,
        }
    }

    fn time_left_mut(&mut self, side: Side) -> &mut f32 {
        match side {
            Side::White => &mut self.white_time_left,
            Side::Black => &mut self.black_time_left,
        }
    }

    pub fn start(&mut self, side: Side) {
        self.running = Some(side);
    }

    pub fn stop(&mut self) {
        self.running = None;
    }

    /// Pause `mover`, credit the increment and start the opponent's clock
    pub fn hand_over(&mut self, mover: Side) {
        if self.running.is_none() {
            return;
        }
        if self.increment > 0.0 {
            *self.time_left_mut(mover) += self.increment;
        }
        self.running = Some(mover.opponent());
    }

    /// Run the active clock down by `delta` seconds
    ///
    /// Returns the side whose flag fell during this tick; the clock stops.
    pub fn tick(&mut self, delta: f32) -> Option<Side> {
        let side = self.running?;
        let left = self.time_left_mut(side);
        let before = *left;
        *left = (before - delta).max(0.0);
        let after = *left;

        if before > 10.0 && after <= 10.0 && after > 0.0 {
            warn!("[CLOCK] {} has 10 seconds remaining!", side);
        } else if before > 30.0 && after <= 30.0 {
            info!("[CLOCK] {} has 30 seconds remaining", side);
        }

        if after <= 0.0 {
            self.running = None;
            info!(
                "[CLOCK] {} ran out of time! Final: W:{:.1}s B:{:.1}s",
                side, self.white_time_left, self.black_time_left
            );
            return Some(side);
        }
        None
    }
}
