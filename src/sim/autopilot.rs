//! Seeded autopilot and headless runner.
//!
//! The autopilot flaps whenever the bird sinks below a jittered target
//! height, but only with probability `skill`. A skill of 1.0 keeps the bird
//! aloft indefinitely; 0.0 never flaps.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use crate::collab::{DebugLine, PositionProbe, TimeScaleCell, UiPresenter};
use crate::core::{GameConfig, GameRng, Phase, Result};
use crate::machine::GameStateMachine;
use crate::session::{Input, Session};

/// Random jitter applied to the target height each decision.
const TARGET_JITTER: f32 = 0.5;

/// Decides when the bird flaps.
#[derive(Clone, Debug)]
pub struct Autopilot {
    rng: GameRng,
    skill: f64,
    target: f32,
}

impl Autopilot {
    #[must_use]
    pub fn new(seed: u64, skill: f64) -> Self {
        Self {
            rng: GameRng::new(seed),
            skill: skill.clamp(0.0, 1.0),
            target: 0.0,
        }
    }

    /// Should the bird flap this frame?
    pub fn decide(&mut self, bird: &Bird) -> bool {
        let target = self.target + self.rng.gen_range_f32(-TARGET_JITTER..TARGET_JITTER);
        if bird.y >= target || bird.vy > 0.0 {
            return false;
        }
        self.rng.gen_bool(self.skill)
    }
}

/// Outcome of a headless run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    pub final_phase: Phase,
    pub score: u64,
    /// Frames actually simulated.
    pub frames: u64,
    /// Frame on which the bound check killed the bird.
    pub died_at: Option<u64>,
}

struct HeadlessUi;

impl UiPresenter for HeadlessUi {
    fn set_score_text(&mut self, _text: &str) {}

    fn set_ui_sequence(&mut self, _phase: Phase) {}

    fn show_pause_indicator(&mut self) {}

    fn draw_debug_line(&mut self, _line: DebugLine) {}
}

/// Play a full session without a host.
///
/// Stops after `max_frames` or on death, whichever is first.
pub fn run(
    config: GameConfig,
    seed: u64,
    skill: f64,
    max_frames: u64,
    frame_time: Duration,
) -> Result<SimReport> {
    let mut bird = Bird::new(0.0);
    let probe = PositionProbe::new(bird.y);
    let clock = TimeScaleCell::new();

    let machine = GameStateMachine::new(config, probe.clone(), HeadlessUi)?;
    let mut session = Session::start(machine, clock.clone())?;
    session.input(Input::Start)?;

    let mut pilot = Autopilot::new(seed, skill);
    let dt = frame_time.as_secs_f32();
    let mut frames = 0;
    let mut died_at = None;

    while frames < max_frames {
        if pilot.decide(&bird) {
            bird.flap();
        }
        bird.step(dt * clock.get());
        probe.set(bird.y);

        let report = session.frame(frame_time);
        frames += 1;

        if report.died {
            debug!("Simulated bird died on frame {frames} at y={:.3}", bird.y);
            died_at = Some(frames);
            break;
        }
    }

    let snapshot = session.finish();
    Ok(SimReport {
        final_phase: snapshot.phase,
        score: snapshot.score,
        frames,
        died_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(20);

    #[test]
    fn test_no_skill_falls() {
        let report = run(GameConfig::new(5.0), 1, 0.0, 500, FRAME).unwrap();
        assert_eq!(report.final_phase, Phase::Dead);
        assert!(report.died_at.is_some());
        assert!(report.frames < 100);
    }

    #[test]
    fn test_full_skill_survives() {
        let report = run(GameConfig::new(5.0), 3, 1.0, 500, FRAME).unwrap();
        assert_eq!(report.final_phase, Phase::Play);
        assert_eq!(report.died_at, None);
        assert_eq!(report.frames, 500);
        // 500 frames * 20ms = 10s at one point per 100ms
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_autopilot_waits_while_rising() {
        let mut pilot = Autopilot::new(0, 1.0);
        let rising = Bird { y: -3.0, vy: 1.0 };
        assert!(!pilot.decide(&rising));
        let sinking = Bird { y: -3.0, vy: -1.0 };
        assert!(pilot.decide(&sinking));
    }

    #[test]
    fn test_invalid_config() {
        assert!(run(GameConfig::new(-1.0), 0, 1.0, 10, FRAME).is_err());
    }
}
