//! Deterministic headless play.
//!
//! Drives a real `Session` with a toy bird and a seeded autopilot. Same
//! seed and config, same `SimReport`.

pub mod bird;
pub mod autopilot;

pub use bird::{Bird, FLAP_VELOCITY, GRAVITY};
pub use autopilot::{run, Autopilot, SimReport};
