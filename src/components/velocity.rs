//! Inertial motion with exponential decay.
//!
//! The [`Velocity`] component is integrated by
//! [`crate::systems::velocity::velocity_system`]: the controller axis
//! accelerates it, `drag ^ dt` decays it and the result moves the sprite.
//! Because the decay is applied as a power of elapsed time, the same span of
//! wall time yields the same velocity however it is split into frames.
//!
//! [`Velocity`] and [`Movement`](crate::components::movement::Movement) are
//! swapped in and out by the player's mode toggle, so both use sparse-set
//! storage.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
#[component(storage = "SparseSet")]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
    /// Fraction of velocity kept after one second, in (0, 1].
    pub drag: f32,
    /// Acceleration applied per unit of controller axis, per second.
    pub speed: f32,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32, drag: f32, speed: f32) -> Self {
        Self {
            vx,
            vy,
            drag,
            speed,
        }
    }

    /// Multiplier for a frame of `dt` seconds.
    pub fn decay(&self, dt: f32) -> f32 {
        self.drag.powf(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_composes_multiplicatively() {
        let v = Velocity::new(0.0, 0.0, 0.5, 600.0);
        let whole = v.decay(1.0);
        let split = (0..10).fold(1.0_f32, |acc, _| acc * v.decay(0.1));
        assert!((whole - split).abs() < 1e-5);
        assert!((whole - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_drag_of_one_never_decays() {
        let v = Velocity::new(1.0, 0.0, 1.0, 0.0);
        assert_eq!(v.decay(3.7), 1.0);
    }
}
