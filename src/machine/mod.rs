//! Game state machine and the values it reports to the host.

pub mod report;
pub mod state_machine;

pub use report::{StateSnapshot, TickReport, Transition, FROZEN_TIME_SCALE, NORMAL_TIME_SCALE};
pub use state_machine::GameStateMachine;
