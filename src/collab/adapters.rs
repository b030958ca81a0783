//! Shared-handle collaborators for hosts without an engine.
//!
//! Each adapter is a cheap `Rc` handle: clone it, give one clone to the
//! state machine, and keep the other on the host side to write or inspect.
//! They are `!Send` like the rest of the single-threaded frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::traits::{DebugLine, PlayerPositionSource, TimeController, UiPresenter};
use crate::core::Phase;

/// Player position shared between the host physics and the state machine.
#[derive(Clone, Debug, Default)]
pub struct PositionProbe(Rc<Cell<f32>>);

impl PositionProbe {
    #[must_use]
    pub fn new(y: f32) -> Self {
        Self(Rc::new(Cell::new(y)))
    }

    pub fn set(&self, y: f32) {
        self.0.set(y);
    }

    #[must_use]
    pub fn get(&self) -> f32 {
        self.0.get()
    }
}

impl PlayerPositionSource for PositionProbe {
    fn vertical_position(&self) -> f32 {
        self.0.get()
    }
}

/// One call received by a [`RecordingPresenter`].
#[derive(Clone, Debug, PartialEq)]
pub enum UiCall {
    ScoreText(String),
    Sequence(Phase),
    PauseIndicator,
    DebugLine(DebugLine),
}

/// Presenter that records every call into a shared log.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    calls: Rc<RefCell<Vec<UiCall>>>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every call so far.
    #[must_use]
    pub fn calls(&self) -> Vec<UiCall> {
        self.calls.borrow().clone()
    }

    /// Remove and return every call so far.
    pub fn drain(&self) -> Vec<UiCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    /// Most recent score label, if any.
    #[must_use]
    pub fn last_score_text(&self) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            UiCall::ScoreText(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// Most recent UI sequence, if any.
    #[must_use]
    pub fn last_sequence(&self) -> Option<Phase> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            UiCall::Sequence(phase) => Some(*phase),
            _ => None,
        })
    }

    fn push(&self, call: UiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl UiPresenter for RecordingPresenter {
    fn set_score_text(&mut self, text: &str) {
        self.push(UiCall::ScoreText(text.to_owned()));
    }

    fn set_ui_sequence(&mut self, phase: Phase) {
        self.push(UiCall::Sequence(phase));
    }

    fn show_pause_indicator(&mut self) {
        self.push(UiCall::PauseIndicator);
    }

    fn draw_debug_line(&mut self, line: DebugLine) {
        self.push(UiCall::DebugLine(line));
    }
}

/// Time scale shared with whoever owns the host clock. Starts at 1.0.
#[derive(Clone, Debug)]
pub struct TimeScaleCell(Rc<Cell<f32>>);

impl Default for TimeScaleCell {
    fn default() -> Self {
        Self(Rc::new(Cell::new(1.0)))
    }
}

impl TimeScaleCell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> f32 {
        self.0.get()
    }

    /// Is simulation time currently frozen?
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.0.get() == 0.0
    }
}

impl TimeController for TimeScaleCell {
    fn set_time_scale(&mut self, scale: f32) {
        self.0.set(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_shared() {
        let probe = PositionProbe::new(1.0);
        let reader = probe.clone();
        probe.set(-3.0);
        assert_eq!(reader.vertical_position(), -3.0);
    }

    #[test]
    fn test_recording_presenter() {
        let log = RecordingPresenter::new();
        let mut ui = log.clone();
        ui.set_score_text("Score: 1");
        ui.set_ui_sequence(Phase::Play);
        ui.show_pause_indicator();
        ui.set_score_text("Score: 2");

        assert_eq!(log.calls().len(), 4);
        assert_eq!(log.last_score_text().as_deref(), Some("Score: 2"));
        assert_eq!(log.last_sequence(), Some(Phase::Play));

        let drained = log.drain();
        assert_eq!(drained[2], UiCall::PauseIndicator);
        assert!(log.calls().is_empty());
    }

    #[test]
    fn test_time_scale_cell() {
        let cell = TimeScaleCell::new();
        assert_eq!(cell.get(), 1.0);

        let mut controller = cell.clone();
        controller.set_time_scale(0.0);
        assert!(cell.is_frozen());
    }
}
