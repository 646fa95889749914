use bevy_ecs::prelude::Component;

/// Constant angular drift, in degrees per second.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Rotation {
    pub deviation: f32,
}

impl Rotation {
    pub fn new(deviation: f32) -> Self {
        Self { deviation }
    }
}
