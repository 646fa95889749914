//! Keyboard to controller-axis accumulation.
//!
//! Every non-repeat directional key-down adds a unit impulse to every
//! [`Controller`], and the matching key-up subtracts it. Holding opposite keys
//! cancels out; holding W and Up together gives a y axis of -2.
use bevy_ecs::prelude::*;

use crate::components::controller::Controller;
use crate::resources::input::FrameInput;

pub fn controller_system(mut query: Query<&mut Controller>, input: Res<FrameInput>) {
    for event in &input.events {
        let Some((dx, dy)) = event.impulse() else {
            continue;
        };
        for mut controller in query.iter_mut() {
            controller.apply(dx, dy);
        }
    }
}
