//! Game configuration.
//!
//! Hosts configure the state machine at construction by providing a
//! `GameConfig`. The only values the game logic really needs are the death
//! boundary and the debug toggle; the rest tune the score task.
//!
//! Configs can be built in code with the `with_*` builders or parsed from
//! TOML. Missing TOML keys fall back to the defaults:
//!
//! ```
//! use flappy_state::core::{GameConfig, Phase};
//!
//! let config = GameConfig::from_toml_str("death_boundary = 4.5\ndebug = true").unwrap();
//! assert_eq!(config.death_boundary, 4.5);
//! assert!(config.debug);
//! assert_eq!(config.initial_phase, Phase::Start);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameStateError, Result};
use super::phase::Phase;

/// Whether the periodic score task is gated by phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Count on every interval regardless of phase.
    #[default]
    Always,
    /// Discard increments unless the game is in PLAY.
    WhilePlaying,
}

/// Complete state machine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Vertical distance from the origin beyond which the player is dead.
    pub death_boundary: f32,

    /// Emit death-zone debug lines while the player is alive.
    pub debug: bool,

    /// Half-width of the debug lines.
    pub debug_line_width: f32,

    /// Score added per interval.
    pub score_step: u64,

    /// Interval between score increments. Written as `score_interval_ms`,
    /// whole or fractional milliseconds.
    #[serde(rename = "score_interval_ms", with = "millis")]
    pub score_interval: Duration,

    /// Phase gating for the score task.
    pub score_policy: ScorePolicy,

    /// Phase the machine starts in.
    pub initial_phase: Phase,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            death_boundary: 5.0,
            debug: false,
            debug_line_width: 2.0,
            score_step: 1,
            score_interval: Duration::from_millis(100),
            score_policy: ScorePolicy::Always,
            initial_phase: Phase::Start,
        }
    }
}

impl GameConfig {
    /// Create a default configuration with the given death boundary.
    #[must_use]
    pub fn new(death_boundary: f32) -> Self {
        Self {
            death_boundary,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML and validate it.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the death boundary.
    #[must_use]
    pub fn with_death_boundary(mut self, boundary: f32) -> Self {
        self.death_boundary = boundary;
        self
    }

    /// Toggle debug line output.
    #[must_use]
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Set the half-width of debug lines.
    #[must_use]
    pub fn with_debug_line_width(mut self, width: f32) -> Self {
        self.debug_line_width = width;
        self
    }

    /// Set the score step.
    #[must_use]
    pub fn with_score_step(mut self, step: u64) -> Self {
        self.score_step = step;
        self
    }

    /// Set the score interval. Kept at full precision.
    #[must_use]
    pub fn with_score_interval(mut self, interval: Duration) -> Self {
        self.score_interval = interval;
        self
    }

    /// Set the score gating policy.
    #[must_use]
    pub fn with_score_policy(mut self, policy: ScorePolicy) -> Self {
        self.score_policy = policy;
        self
    }

    /// Set the initial phase.
    #[must_use]
    pub fn with_initial_phase(mut self, phase: Phase) -> Self {
        self.initial_phase = phase;
        self
    }

    /// Interval between score increments.
    #[must_use]
    pub fn score_interval(&self) -> Duration {
        self.score_interval
    }

    /// Check the configuration for values the state machine cannot use.
    pub fn validate(&self) -> Result<()> {
        if !self.death_boundary.is_finite() || self.death_boundary <= 0.0 {
            return Err(GameStateError::InvalidConfig(format!(
                "death_boundary must be a positive finite number, got {}",
                self.death_boundary
            )));
        }
        if !self.debug_line_width.is_finite() || self.debug_line_width < 0.0 {
            return Err(GameStateError::InvalidConfig(format!(
                "debug_line_width must be non-negative, got {}",
                self.debug_line_width
            )));
        }
        if self.score_step == 0 {
            return Err(GameStateError::InvalidConfig("score_step must be at least 1".into()));
        }
        if self.score_interval.is_zero() {
            return Err(GameStateError::InvalidConfig(
                "score_interval_ms must be greater than zero".into(),
            ));
        }
        if self.initial_phase.is_terminal() {
            return Err(GameStateError::InvalidConfig(
                "initial_phase cannot be dead".into(),
            ));
        }
        Ok(())
    }
}

/// Serde adapter: `Duration` as milliseconds.
///
/// Whole milliseconds are written as integers, anything finer as a float.
/// Floats are rounded to the nearest nanosecond on the way back in.
mod millis {
    use std::time::Duration;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const NANOS_PER_MILLI: u128 = 1_000_000;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Whole(u64),
        Fractional(f64),
    }

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = value.as_nanos();
        if nanos % NANOS_PER_MILLI == 0 {
            serializer.serialize_u64(u64::try_from(nanos / NANOS_PER_MILLI).unwrap_or(u64::MAX))
        } else {
            serializer.serialize_f64(nanos as f64 / NANOS_PER_MILLI as f64)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        match Millis::deserialize(deserializer)? {
            Millis::Whole(ms) => Ok(Duration::from_millis(ms)),
            Millis::Fractional(ms) => {
                let nanos = (ms * NANOS_PER_MILLI as f64).round();
                if !nanos.is_finite() || nanos < 0.0 || nanos > u64::MAX as f64 {
                    return Err(D::Error::custom(format!(
                        "score_interval_ms must be a non-negative number of milliseconds, got {ms}"
                    )));
                }
                Ok(Duration::from_nanos(nanos as u64))
            }
        }
    }
}
