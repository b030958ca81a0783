//! Core types: phases, configuration, errors, RNG.
//!
//! Nothing here knows about collaborators or frames; the state machine and
//! session build on these.

pub mod phase;
pub mod config;
pub mod error;
pub mod rng;

pub use phase::Phase;
pub use config::{GameConfig, ScorePolicy};
pub use error::{GameStateError, Result};
pub use rng::GameRng;
