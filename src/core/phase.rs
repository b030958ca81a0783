//! Game phases and the legal transitions between them.
//!
//! ```text
//!   START ──► PLAY ◄──► PAUSE
//!               │          │
//!               ▼          ▼
//!              DEAD ◄──────┘   (any phase may be forced into DEAD)
//! ```
//!
//! DEAD is terminal: nothing leaves it.

use serde::{Deserialize, Serialize};

/// The discrete game mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Start screen. Nothing is simulated.
    #[default]
    Start,
    /// Player is flying; score is shown and death is checked.
    Play,
    /// Logically frozen; the host should stop simulation time.
    Pause,
    /// Terminal.
    Dead,
}

impl Phase {
    /// All phases in progression order.
    pub const ALL: [Phase; 4] = [Phase::Start, Phase::Play, Phase::Pause, Phase::Dead];

    /// Is this the terminal phase?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Dead)
    }

    /// Can an external request move the game from `self` to `next`?
    ///
    /// Staying in the same phase is always allowed, except that it
    /// carries no effect. Entering DEAD is allowed from anywhere.
    #[must_use]
    pub const fn can_transition_to(self, next: Phase) -> bool {
        match (self, next) {
            (Phase::Dead, Phase::Dead) => true,
            (Phase::Dead, _) => false,
            (_, Phase::Dead) => true,
            (Phase::Start, Phase::Start)
            | (Phase::Play, Phase::Play)
            | (Phase::Pause, Phase::Pause) => true,
            (Phase::Start, Phase::Play) => true,
            (Phase::Play, Phase::Pause) | (Phase::Pause, Phase::Play) => true,
            _ => false,
        }
    }

    /// Short upper-case label, as shown by UI sequences.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Start => "START",
            Phase::Play => "PLAY",
            Phase::Pause => "PAUSE",
            Phase::Dead => "DEAD",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_start() {
        assert_eq!(Phase::default(), Phase::Start);
    }

    #[test]
    fn test_dead_is_terminal() {
        for next in Phase::ALL {
            assert_eq!(Phase::Dead.can_transition_to(next), next == Phase::Dead);
        }
        assert!(Phase::Dead.is_terminal());
        assert!(!Phase::Pause.is_terminal());
    }

    #[test]
    fn test_any_phase_can_die() {
        for from in Phase::ALL {
            assert!(from.can_transition_to(Phase::Dead));
        }
    }

    #[test]
    fn test_play_pause_reversible() {
        assert!(Phase::Play.can_transition_to(Phase::Pause));
        assert!(Phase::Pause.can_transition_to(Phase::Play));
    }

    #[test]
    fn test_rejected_moves() {
        assert!(!Phase::Start.can_transition_to(Phase::Pause));
        assert!(!Phase::Play.can_transition_to(Phase::Start));
        assert!(!Phase::Pause.can_transition_to(Phase::Start));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Phase::Pause), "PAUSE");
        assert_eq!(Phase::Dead.to_string(), "DEAD");
    }
}
