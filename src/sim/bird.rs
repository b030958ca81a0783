//! Minimal vertical bird physics.
//!
//! Y points up, the playfield is centered on 0. Gravity pulls the bird
//! down; a flap replaces the vertical velocity with a fixed upward kick.

/// Downward acceleration, units per second squared.
pub const GRAVITY: f32 = 9.8;

/// Vertical velocity set by a flap, units per second.
pub const FLAP_VELOCITY: f32 = 4.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bird {
    pub y: f32,
    pub vy: f32,
}

impl Bird {
    #[must_use]
    pub fn new(y: f32) -> Self {
        Self { y, vy: 0.0 }
    }

    pub fn flap(&mut self) {
        self.vy = FLAP_VELOCITY;
    }

    /// Integrate `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.vy -= GRAVITY * dt;
        self.y += self.vy * dt;
    }
}
