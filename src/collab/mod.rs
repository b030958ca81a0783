//! External collaborators: traits the host implements, lookup by name, and
//! ready-made shared-handle adapters.

pub mod traits;
pub mod directory;
pub mod adapters;

pub use traits::{DebugLine, PlayerPositionSource, TimeController, UiPresenter};
pub use directory::{Directory, SceneDirectory, PLAYER_NAME, UI_NAME};
pub use adapters::{PositionProbe, RecordingPresenter, TimeScaleCell, UiCall};
