//! Orientation tracking.
//!
//! Turns each tracking entity's sprite to face the pointer or its target
//! entity. Sprites are drawn facing up, so the screen-space angle from
//! `atan2` is offset by [`SPRITE_FACING_OFFSET`].
use bevy_ecs::prelude::*;

use crate::components::sprite::Sprite;
use crate::components::tracking::Tracking;
use crate::resources::input::FrameInput;

/// Degrees added to `atan2` angles: textures face up, `atan2(0, 1)` is right.
pub const SPRITE_FACING_OFFSET: f32 = 90.0;

/// Sprite angle that makes something at `from` face `to`.
pub fn facing_angle(from: (f32, f32), to: (f32, f32)) -> f32 {
    (to.1 - from.1).atan2(to.0 - from.0).to_degrees() + SPRITE_FACING_OFFSET
}

pub fn tracking_system(
    trackers: Query<(Entity, &Tracking)>,
    mut sprites: Query<&mut Sprite>,
    input: Res<FrameInput>,
) {
    let mut angles: Vec<(Entity, f32)> = Vec::new();
    for (entity, tracking) in trackers.iter() {
        let Ok(own) = sprites.get(entity) else {
            continue;
        };
        let target_center = if tracking.follow_mouse {
            input.pointer
        } else {
            // A destroyed target has no sprite; keep the current angle.
            let Some(center) = tracking
                .target
                .and_then(|target| sprites.get(target).ok())
                .map(|s| s.center())
            else {
                continue;
            };
            center
        };
        angles.push((entity, facing_angle(own.center(), target_center)));
    }

    for (entity, angle) in angles {
        if let Ok(mut sprite) = sprites.get_mut(entity) {
            sprite.angle = angle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_right_is_ninety() {
        assert!((facing_angle((100.0, 100.0), (200.0, 100.0)) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_facing_up_is_zero() {
        assert!(facing_angle((0.0, 100.0), (0.0, 0.0)).abs() < 1e-4);
    }

    #[test]
    fn test_facing_down_is_one_eighty() {
        assert!((facing_angle((0.0, 0.0), (0.0, 50.0)) - 180.0).abs() < 1e-4);
    }
}
