//! System ordering
//!
//! Each frame runs, in order:
//! 1. **Lifecycle** - match (re)start
//! 2. **Input** - selections and move attempts, automated reply included
//! 3. **Execution** - promotion choices and cancellations
//! 4. **Clock** - countdown of the side to move
//! 5. **Visual** - highlights and HUD-facing notices

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// `StartMatch` handling and initial population
    Lifecycle,

    /// Pointer messages into the session; includes the automated reply
    Input,

    /// Pending-promotion resolution
    Execution,

    /// Clock ticking and flag fall
    Clock,

    /// Cell highlighting and notice fan-out
    Visual,
}
