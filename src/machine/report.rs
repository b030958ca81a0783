//! Values the state machine hands back to its host.

use serde::{Deserialize, Serialize};

use crate::core::Phase;

/// Normal simulation speed.
pub const NORMAL_TIME_SCALE: f32 = 1.0;

/// Frozen simulation.
pub const FROZEN_TIME_SCALE: f32 = 0.0;

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Phase after the tick.
    pub phase: Phase,

    /// The bound check killed the player during this tick.
    pub died: bool,

    /// Time scale the host timing authority should apply, if any.
    pub time_scale: Option<f32>,

    /// Score added by the periodic task during this tick.
    pub score_added: u64,
}

/// Result of an external phase change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,

    /// Time scale the host should apply, set when leaving PAUSE.
    pub time_scale: Option<f32>,
}

impl Transition {
    pub(crate) fn unchanged(phase: Phase) -> Self {
        Self {
            from: phase,
            to: phase,
            time_scale: None,
        }
    }

    /// Did the phase actually change?
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Read-only copy of the machine's observable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub phase: Phase,
    pub score: u64,
}
