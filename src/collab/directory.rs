//! Lookup of collaborators by well-known name.
//!
//! Used only as a fallback when the host did not hand collaborators to the
//! state machine directly. The host decides what "finding by name" means;
//! `SceneDirectory` is a plain in-memory registry.

use std::collections::HashMap;

use super::traits::{PlayerPositionSource, UiPresenter};

/// Name the player collaborator is registered under.
pub const PLAYER_NAME: &str = "Player";

/// Name the UI collaborator is registered under.
pub const UI_NAME: &str = "UI";

/// Host-side registry that can hand out collaborators by name.
///
/// Taking a collaborator moves it out; a second take of the same name
/// returns `None`.
pub trait Directory {
    fn take_player(&mut self, name: &str) -> Option<Box<dyn PlayerPositionSource>>;

    fn take_ui(&mut self, name: &str) -> Option<Box<dyn UiPresenter>>;
}

/// In-memory [`Directory`].
#[derive(Default)]
pub struct SceneDirectory {
    players: HashMap<String, Box<dyn PlayerPositionSource>>,
    uis: HashMap<String, Box<dyn UiPresenter>>,
}

impl SceneDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a position source (builder pattern).
    #[must_use]
    pub fn with_player(
        mut self,
        name: impl Into<String>,
        player: impl PlayerPositionSource + 'static,
    ) -> Self {
        self.players.insert(name.into(), Box::new(player));
        self
    }

    /// Register a presenter (builder pattern).
    #[must_use]
    pub fn with_ui(mut self, name: impl Into<String>, ui: impl UiPresenter + 'static) -> Self {
        self.uis.insert(name.into(), Box::new(ui));
        self
    }

    /// Number of registered collaborators not yet taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len() + self.uis.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Directory for SceneDirectory {
    fn take_player(&mut self, name: &str) -> Option<Box<dyn PlayerPositionSource>> {
        self.players.remove(name)
    }

    fn take_ui(&mut self, name: &str) -> Option<Box<dyn UiPresenter>> {
        self.uis.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{PositionProbe, RecordingPresenter};

    #[test]
    fn test_take_by_name() {
        let mut dir = SceneDirectory::new()
            .with_player(PLAYER_NAME, PositionProbe::new(2.0))
            .with_ui(UI_NAME, RecordingPresenter::new());
        assert_eq!(dir.len(), 2);

        let player = dir.take_player(PLAYER_NAME).unwrap();
        assert_eq!(player.vertical_position(), 2.0);
        assert!(dir.take_ui(UI_NAME).is_some());
        assert!(dir.is_empty());
    }

    #[test]
    fn test_take_twice() {
        let mut dir = SceneDirectory::new().with_player(PLAYER_NAME, PositionProbe::default());
        assert!(dir.take_player(PLAYER_NAME).is_some());
        assert!(dir.take_player(PLAYER_NAME).is_none());
    }

    #[test]
    fn test_wrong_name() {
        let mut dir = SceneDirectory::new().with_ui("Hud", RecordingPresenter::new());
        assert!(dir.take_ui(UI_NAME).is_none());
        assert!(dir.take_player(PLAYER_NAME).is_none());
    }
}
