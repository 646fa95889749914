//! Inertial motion.
//!
//! For every entity with a [`Velocity`], a [`Sprite`] and a [`Controller`]:
//!
//! ```text
//! vel      += axis * dt * speed
//! vel      *= drag ^ dt
//! position += vel * dt
//! ```
//!
//! The decay term is frame-rate independent: `(drag^a) * (drag^b) ==
//! drag^(a+b)`. The acceleration and position terms are first-order in `dt`
//! and are not.
use bevy_ecs::prelude::*;

use crate::components::controller::Controller;
use crate::components::sprite::{Rect, Sprite};
use crate::components::velocity::Velocity;
use crate::resources::worldtime::WorldTime;

pub fn velocity_system(
    mut query: Query<(&mut Velocity, &mut Sprite, &Controller)>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut velocity, mut sprite, controller) in query.iter_mut() {
        integrate(&mut velocity, &mut sprite.rect, controller, dt);
    }
}

/// One integration step of `dt` seconds.
pub fn integrate(velocity: &mut Velocity, rect: &mut Rect, controller: &Controller, dt: f32) {
    velocity.vx += controller.cx * dt * velocity.speed;
    velocity.vy += controller.cy * dt * velocity.speed;

    let decay = velocity.decay(dt);
    velocity.vx *= decay;
    velocity.vy *= decay;

    rect.x += velocity.vx * dt;
    rect.y += velocity.vy * dt;
}
