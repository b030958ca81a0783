//! Error type shared by every fallible operation in the crate.
//!
//! Construction fails closed with `MissingCollaborator` or `InvalidConfig`.
//! Rejected phase changes report `InvalidTransition` and leave the machine
//! untouched.

use thiserror::Error;

use super::phase::Phase;

#[derive(Error, Debug)]
pub enum GameStateError {
    /// A position source or UI presenter was neither supplied nor found by
    /// name.
    #[error("required collaborator `{name}` could not be resolved")]
    MissingCollaborator { name: String },
    /// The requested phase change is not in the transition table.
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: Phase, to: Phase },
    /// A configuration value the state machine cannot use.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// TOML configuration that failed to parse.
    #[error(transparent)]
    ConfigParse(#[from] toml::de::Error),
    /// `attach` called on a machine whose score task was already started.
    #[error("the score task was already started")]
    AlreadyAttached,
}

impl GameStateError {
    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self::MissingCollaborator { name: name.into() }
    }
}

/// Result alias defaulting to [`GameStateError`].
pub type Result<T, E = GameStateError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameStateError::missing("UI");
        assert_eq!(err.to_string(), "required collaborator `UI` could not be resolved");

        let err = GameStateError::InvalidTransition {
            from: Phase::Dead,
            to: Phase::Play,
        };
        assert_eq!(err.to_string(), "cannot move from DEAD to PLAY");
    }
}
