//! # flappy-state
//!
//! Game-state core for a Flappy-Bird-style game, independent of any engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit frames**: The host calls `tick`/`update` once per frame.
//!    Nothing registers itself with a global loop.
//!
//! 2. **Injected collaborators**: Player position, UI, and time are traits
//!    handed in at construction. Lookup by name is a host-side fallback
//!    (`Directory`), and construction fails closed if it finds nothing.
//!
//! 3. **No hidden globals**: Pausing reports a time scale instead of
//!    setting one; the session forwards it to a `TimeController`.
//!
//! ## Modules
//!
//! - `core`: Phases, configuration, errors, RNG
//! - `collab`: Collaborator traits, lookup by name, shared-handle adapters
//! - `score`: Periodic fixed-interval score task
//! - `machine`: The game state machine
//! - `session`: Frame-loop driver with input mapping
//! - `sim`: Seeded headless play for tests and tuning

pub mod core;
pub mod collab;
pub mod score;
pub mod machine;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameStateError, Phase, ScorePolicy};

pub use crate::collab::{
    DebugLine, Directory, PlayerPositionSource, PositionProbe, RecordingPresenter,
    SceneDirectory, TimeController, TimeScaleCell, UiCall, UiPresenter, PLAYER_NAME, UI_NAME,
};

pub use crate::score::{ScoreCounter, TaskStatus};

pub use crate::machine::{
    GameStateMachine, StateSnapshot, TickReport, Transition, FROZEN_TIME_SCALE, NORMAL_TIME_SCALE,
};

pub use crate::session::{Input, Session};

pub use crate::sim::{Autopilot, Bird, SimReport};
