//! Accumulated directional input.
//!
//! Each key-down adds a unit impulse on its axis and the matching key-up
//! removes it again, so the axis holds the signed sum of the directional keys
//! currently held. Values are not clamped.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Controller {
    pub cx: f32,
    pub cy: f32,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, dx: f32, dy: f32) {
        self.cx += dx;
        self.cy += dy;
    }

    pub fn is_idle(&self) -> bool {
        self.cx == 0.0 && self.cy == 0.0
    }
}
