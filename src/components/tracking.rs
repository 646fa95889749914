//! Orientation source for an entity's sprite.
//!
//! A tracker either faces the pointer or another entity. A target that no
//! longer has a sprite is simply not followed; the tracker keeps its angle.

use bevy_ecs::prelude::*;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tracking {
    pub target: Option<Entity>,
    pub follow_mouse: bool,
}

impl Tracking {
    /// Face the pointer every frame.
    pub fn mouse() -> Self {
        Self {
            target: None,
            follow_mouse: true,
        }
    }

    /// Face another entity while it has a sprite.
    pub fn entity(target: Entity) -> Self {
        Self {
            target: Some(target),
            follow_mouse: false,
        }
    }
}
