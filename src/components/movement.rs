//! Direct (non-inertial) motion.
//!
//! An entity with [`Movement`] travels along its direction at a flat
//! `speed`, independent of the direction vector's length. See
//! [`crate::systems::mobility`].

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
#[component(storage = "SparseSet")]
pub struct Movement {
    /// Direction x. Normalized by the mobility system, not here.
    pub vx: f32,
    /// Direction y.
    pub vy: f32,
    /// Distance per second along the normalized direction.
    pub speed: f32,
}

impl Movement {
    pub fn new(vx: f32, vy: f32, speed: f32) -> Self {
        Self { vx, vy, speed }
    }

    /// Unit direction, or `None` for the zero vector.
    pub fn direction(&self) -> Option<(f32, f32)> {
        normalize(self.vx, self.vy)
    }
}

/// Normalize a 2D vector. The zero vector has no direction.
pub fn normalize(x: f32, y: f32) -> Option<(f32, f32)> {
    let len = x.hypot(y);
    if len == 0.0 || !len.is_finite() {
        None
    } else {
        Some((x / len, y / len))
    }
}
