//! Collaborator traits.
//!
//! The state machine never talks to an engine directly. Hosts implement
//! these traits over whatever physics, UI, and timing they have.

use crate::core::Phase;

/// Read-only source of the player's vertical position.
///
/// Polled once per update.
pub trait PlayerPositionSource {
    /// Current vertical position; 0 is the center of the playfield.
    fn vertical_position(&self) -> f32;
}

/// A horizontal line segment marking one edge of the death zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugLine {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl DebugLine {
    /// Horizontal line at height `y`, spanning `-half_width..=half_width`.
    #[must_use]
    pub fn horizontal(y: f32, half_width: f32) -> Self {
        Self {
            from: (half_width, y),
            to: (-half_width, y),
        }
    }
}

/// Presents score and phase to the user.
///
/// All calls are fire-and-forget.
pub trait UiPresenter {
    /// Replace the score label.
    fn set_score_text(&mut self, text: &str);

    /// Switch the UI to the screens for `phase`.
    fn set_ui_sequence(&mut self, phase: Phase);

    /// Show the paused indicator.
    fn show_pause_indicator(&mut self);

    /// Draw a debug line. Hosts without debug drawing can ignore it.
    fn draw_debug_line(&mut self, _line: DebugLine) {}
}

/// Authority over the host's global simulation time scale.
///
/// 1.0 is normal speed, 0.0 is frozen.
pub trait TimeController {
    fn set_time_scale(&mut self, scale: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_line_horizontal() {
        let line = DebugLine::horizontal(5.0, 2.0);
        assert_eq!(line.from, (2.0, 5.0));
        assert_eq!(line.to, (-2.0, 5.0));
    }
}
