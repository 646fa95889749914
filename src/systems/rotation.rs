use bevy_ecs::prelude::*;

use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Spin sprites by their rotation's `deviation * dt` degrees.
pub fn rotation_system(mut query: Query<(&mut Sprite, &Rotation)>, time: Res<WorldTime>) {
    let dt = time.delta;
    for (mut sprite, rotation) in query.iter_mut() {
        sprite.angle += rotation.deviation * dt;
    }
}
