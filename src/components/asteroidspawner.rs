//! Periodic asteroid spawn rule.
//!
//! A spawner entity has no sprite of its own. Every `delay` seconds it emits
//! an asteroid that enters from the screen edge opposite to `direction` and
//! travels along it. The first spawn happens after `timer` seconds, which
//! lets several spawners start staggered.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct AsteroidSpawner {
    /// Seconds until the next spawn.
    pub timer: f32,
    /// Seconds between spawns once running.
    pub delay: f32,
    /// Travel direction of spawned asteroids.
    pub direction: (f32, f32),
    /// Width and height of spawned asteroids.
    pub size: (f32, f32),
}

impl AsteroidSpawner {
    pub fn new(timer: f32, delay: f32, direction: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            timer,
            delay,
            direction,
            size,
        }
    }

    /// Advance the countdown. Returns true when a spawn is due, in which case
    /// the timer has been reset to `delay`.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = self.delay;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_fires_once_and_resets() {
        let mut s = AsteroidSpawner::new(1.0, 2.0, (1.0, 0.0), (40.0, 40.0));
        assert!(!s.tick(0.5));
        assert!(s.tick(0.5));
        assert_eq!(s.timer, 2.0);
        assert!(!s.tick(1.0));
    }
}
