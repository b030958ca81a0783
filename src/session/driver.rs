//! Host-loop driver.
//!
//! A `Session` owns an attached state machine and the host's time
//! controller. The host calls `input` when the player presses something and
//! `frame` once per rendered frame.

use std::time::Duration;

use log::debug;

use crate::collab::TimeController;
use crate::core::{GameStateError, Phase, Result};
use crate::machine::{GameStateMachine, StateSnapshot, TickReport, Transition, NORMAL_TIME_SCALE};

/// Host input understood by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Leave the start screen.
    Start,
    /// Pause while playing, resume while paused.
    TogglePause,
    /// The player hit an obstacle.
    Collide,
}

/// Running game session.
pub struct Session {
    machine: GameStateMachine,
    time: Box<dyn TimeController>,
    time_scale: f32,
}

impl Session {
    /// Wrap `machine`, start its score task, and reset host time to normal.
    pub fn start(mut machine: GameStateMachine, time: impl TimeController + 'static) -> Result<Self> {
        machine.attach()?;

        let mut time: Box<dyn TimeController> = Box::new(time);
        time.set_time_scale(NORMAL_TIME_SCALE);

        Ok(Self {
            machine,
            time,
            time_scale: NORMAL_TIME_SCALE,
        })
    }

    #[must_use]
    pub fn machine(&self) -> &GameStateMachine {
        &self.machine
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Time scale last sent to the controller.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Apply one input.
    ///
    /// Inputs that make no sense in the current phase are rejected and
    /// leave the session untouched.
    pub fn input(&mut self, input: Input) -> Result<Transition> {
        let result = match input {
            Input::Start => match self.machine.phase() {
                Phase::Start => self.machine.set_phase(Phase::Play),
                from => Err(GameStateError::InvalidTransition {
                    from,
                    to: Phase::Play,
                }),
            },
            Input::TogglePause => match self.machine.phase() {
                Phase::Play => self.machine.set_phase(Phase::Pause),
                Phase::Pause => self.machine.set_phase(Phase::Play),
                from => Err(GameStateError::InvalidTransition {
                    from,
                    to: Phase::Pause,
                }),
            },
            Input::Collide => Ok(self.machine.set_dead()),
        };

        match result {
            Ok(transition) => {
                if let Some(scale) = transition.time_scale {
                    self.apply_time_scale(scale);
                }
                Ok(transition)
            }
            Err(err) => {
                debug!("Ignoring {input:?}: {err}");
                Err(err)
            }
        }
    }

    /// Run one frame: poll the player, tick, forward time scale.
    pub fn frame(&mut self, delta_time: Duration) -> TickReport {
        let report = self.machine.update(delta_time);
        if let Some(scale) = report.time_scale {
            self.apply_time_scale(scale);
        }
        report
    }

    /// Stop scoring and return the final state.
    pub fn finish(mut self) -> StateSnapshot {
        self.machine.detach();
        self.machine.snapshot()
    }

    fn apply_time_scale(&mut self, scale: f32) {
        if self.time_scale != scale {
            debug!("Time scale {} -> {}", self.time_scale, scale);
            self.time_scale = scale;
            self.time.set_time_scale(scale);
        }
    }
}
