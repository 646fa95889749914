//! Direct motion.
//!
//! Entities with a [`Movement`] and a sprite advance `speed * dt` along their
//! normalized direction. A zero direction moves nothing.
//!
//! When the entity also has a controller with a non-zero axis, the axis
//! becomes the movement direction first, so a player in running mode steers
//! with the keyboard. An idle controller keeps the last heading.
use bevy_ecs::prelude::*;

use crate::components::controller::Controller;
use crate::components::movement::Movement;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

pub fn mobility_system(
    mut query: Query<(&mut Movement, &mut Sprite, Option<&Controller>)>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut movement, mut sprite, controller) in query.iter_mut() {
        if let Some(controller) = controller.filter(|c| !c.is_idle()) {
            movement.vx = controller.cx;
            movement.vy = controller.cy;
        }
        if let Some((dx, dy)) = movement.direction() {
            sprite.rect.x += dx * movement.speed * dt;
            sprite.rect.y += dy * movement.speed * dt;
        }
    }
}
