//! The game state machine.
//!
//! Holds the current phase and score, checks the death bound while
//! playing, and forwards phase and score to the UI presenter. One `tick`
//! per host frame; no threads.
//!
//! ## Phases per tick
//!
//! | Phase | Work                                                       |
//! |-------|------------------------------------------------------------|
//! | START | nothing                                                    |
//! | PLAY  | show score, bound check, on death switch UI to DEAD        |
//! | PAUSE | show pause indicator, report frozen time, UI to PAUSE      |
//! | DEAD  | UI to DEAD                                                 |
//!
//! The periodic score task runs after the phase logic on every tick, once
//! `attach` has started it.

use std::time::Duration;

use log::{debug, info, trace, warn};

use super::report::{StateSnapshot, TickReport, Transition, FROZEN_TIME_SCALE, NORMAL_TIME_SCALE};
use crate::collab::{
    DebugLine, Directory, PlayerPositionSource, UiPresenter, PLAYER_NAME, UI_NAME,
};
use crate::core::{GameConfig, GameStateError, Phase, Result, ScorePolicy};
use crate::score::ScoreCounter;

/// Phase, score, and death detection for one game session.
pub struct GameStateMachine {
    config: GameConfig,
    phase: Phase,
    score: u64,
    player_y: f32,
    counter: ScoreCounter,
    player: Box<dyn PlayerPositionSource>,
    ui: Box<dyn UiPresenter>,
}

impl GameStateMachine {
    /// Create a machine from explicitly supplied collaborators.
    pub fn new(
        config: GameConfig,
        player: impl PlayerPositionSource + 'static,
        ui: impl UiPresenter + 'static,
    ) -> Result<Self> {
        Self::from_parts(config, Box::new(player), Box::new(ui))
    }

    /// Create a machine from boxed collaborators.
    pub fn from_parts(
        config: GameConfig,
        player: Box<dyn PlayerPositionSource>,
        ui: Box<dyn UiPresenter>,
    ) -> Result<Self> {
        config.validate()?;

        let player_y = player.vertical_position();
        let counter = ScoreCounter::new(config.score_interval());

        Ok(Self {
            phase: config.initial_phase,
            config,
            score: 0,
            player_y,
            counter,
            player,
            ui,
        })
    }

    /// Create a machine, falling back to `directory` for any collaborator
    /// not supplied.
    ///
    /// Missing collaborators are looked up under [`PLAYER_NAME`] and
    /// [`UI_NAME`]. If either is still unresolved the machine is not built.
    pub fn discover(
        config: GameConfig,
        player: Option<Box<dyn PlayerPositionSource>>,
        ui: Option<Box<dyn UiPresenter>>,
        directory: &mut dyn Directory,
    ) -> Result<Self> {
        if player.is_none() || ui.is_none() {
            info!("Player position source or UI presenter not supplied, looking them up by name");
        }

        let player = match player {
            Some(player) => Some(player),
            None => {
                let found = directory.take_player(PLAYER_NAME);
                match &found {
                    Some(_) => info!("Using the position source registered as `{PLAYER_NAME}`"),
                    None => warn!("No position source registered as `{PLAYER_NAME}`"),
                }
                found
            }
        };

        let ui = match ui {
            Some(ui) => Some(ui),
            None => {
                let found = directory.take_ui(UI_NAME);
                match &found {
                    Some(_) => info!("Using the UI presenter registered as `{UI_NAME}`"),
                    None => warn!("No UI presenter registered as `{UI_NAME}`"),
                }
                found
            }
        };

        match (player, ui) {
            (Some(player), Some(ui)) => Self::from_parts(config, player, ui),
            (None, _) => {
                warn!("Game state machine will not be created without a position source");
                Err(GameStateError::missing(PLAYER_NAME))
            }
            (_, None) => {
                warn!("Game state machine will not be created without a UI presenter");
                Err(GameStateError::missing(UI_NAME))
            }
        }
    }

    // === Lifecycle ===

    /// Start the periodic score task. Can only be done once.
    pub fn attach(&mut self) -> Result<()> {
        if !self.counter.start() {
            return Err(GameStateError::AlreadyAttached);
        }
        info!(
            "Score task started: +{} every {:?}",
            self.config.score_step,
            self.counter.interval()
        );
        Ok(())
    }

    /// Cancel the periodic score task. Idempotent.
    pub fn detach(&mut self) {
        if self.counter.is_running() {
            info!("Score task cancelled at score {}", self.score);
        }
        self.counter.cancel();
    }

    /// Is the score task running?
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.counter.is_running()
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Last player position seen by `tick`.
    #[must_use]
    pub fn player_y(&self) -> f32 {
        self.player_y
    }

    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            phase: self.phase,
            score: self.score,
        }
    }

    /// Is the player dead at the last seen position?
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.is_dead_at(self.player_y)
    }

    /// Would the player be dead at `y`?
    ///
    /// Sticky: once DEAD, true for every position.
    #[must_use]
    pub fn is_dead_at(&self, y: f32) -> bool {
        y.abs() > self.config.death_boundary || self.phase == Phase::Dead
    }

    // === Transitions ===

    /// Request a phase change.
    ///
    /// Requesting the current phase is a no-op. Leaving DEAD, and any move
    /// not in the transition table, is rejected and leaves the phase as is.
    pub fn set_phase(&mut self, next: Phase) -> Result<Transition> {
        let from = self.phase;
        if !from.can_transition_to(next) {
            debug!("Rejected phase change {from} -> {next}");
            return Err(GameStateError::InvalidTransition { from, to: next });
        }
        Ok(self.enter(next))
    }

    /// Force DEAD from any phase. Idempotent.
    pub fn set_dead(&mut self) -> Transition {
        self.enter(Phase::Dead)
    }

    fn enter(&mut self, next: Phase) -> Transition {
        let from = self.phase;
        if from == next {
            return Transition::unchanged(from);
        }

        self.phase = next;
        debug!("Phase {from} -> {next}");
        if next == Phase::Dead {
            info!("Player is dead!");
        }

        let time_scale = (from == Phase::Pause).then_some(NORMAL_TIME_SCALE);
        Transition {
            from,
            to: next,
            time_scale,
        }
    }

    // === Frame update ===

    /// Poll the position source and tick.
    pub fn update(&mut self, delta_time: Duration) -> TickReport {
        let y = self.player.vertical_position();
        self.tick(delta_time, y)
    }

    /// Advance one logical update with the player at `player_y`.
    pub fn tick(&mut self, delta_time: Duration, player_y: f32) -> TickReport {
        self.player_y = player_y;
        let mut report = TickReport::default();

        self.draw_death_zone();

        match self.phase {
            Phase::Start => {}
            Phase::Play => {
                let text = self.score_text();
                self.ui.set_score_text(&text);
                if self.is_dead() {
                    self.enter(Phase::Dead);
                    self.ui.set_ui_sequence(Phase::Dead);
                    report.died = true;
                }
            }
            Phase::Pause => {
                self.ui.show_pause_indicator();
                report.time_scale = Some(FROZEN_TIME_SCALE);
                self.ui.set_ui_sequence(Phase::Pause);
            }
            Phase::Dead => {
                self.ui.set_ui_sequence(Phase::Dead);
            }
        }

        report.score_added = self.run_score_task(delta_time);
        report.phase = self.phase;

        trace!(
            "tick dt={:?} y={:.3} phase={} score={}",
            delta_time,
            player_y,
            self.phase,
            self.score
        );
        report
    }

    /// Label shown while playing.
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    fn run_score_task(&mut self, elapsed: Duration) -> u64 {
        let fires = self.counter.advance(elapsed);
        if fires == 0 {
            return 0;
        }

        let gated = self.config.score_policy == ScorePolicy::WhilePlaying && self.phase != Phase::Play;
        if gated {
            return 0;
        }

        let added = fires.saturating_mul(self.config.score_step);
        self.score = self.score.saturating_add(added);
        added
    }

    fn draw_death_zone(&mut self) {
        if !self.config.debug || self.is_dead() {
            return;
        }
        let boundary = self.config.death_boundary;
        let width = self.config.debug_line_width;
        self.ui.draw_debug_line(DebugLine::horizontal(boundary, width));
        self.ui.draw_debug_line(DebugLine::horizontal(-boundary, width));
    }
}

impl std::fmt::Debug for GameStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStateMachine")
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("player_y", &self.player_y)
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
