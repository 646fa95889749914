//! Player action keys.
//!
//! - **Space** (press): fire a bullet from the player's center toward the
//!   pointer.
//! - **Left shift** (press): switch from inertial [`Velocity`] mode to direct
//!   [`Movement`] mode at the configured running speed.
//! - **Left shift** (release): switch back to [`Velocity`] mode with the
//!   configured boost speed and drag.
//!
//! Mode switches keep the heading but not the magnitude: the new component's
//! speed is always the configured constant for that mode. An entity never
//! holds both components; each switch removes one and inserts the other.
//! Several toggles within one frame are applied in event order.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::collisiontag::CollisionTag;
use crate::components::lifespan::Lifespan;
use crate::components::movement::{Movement, normalize};
use crate::components::sprite::{Rect, Sprite, SpriteTexture};
use crate::components::velocity::Velocity;
use crate::events::input::{InputEvent, Key};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::FrameInput;
use crate::resources::player::Player;
use crate::systems::tracking::facing_angle;

/// Locomotion state of the actor as the frame's events are replayed.
#[derive(Clone, Copy)]
enum Mode {
    Inertial(Velocity),
    Direct(Movement),
    Neither,
}

pub fn player_action_system(
    input: Res<FrameInput>,
    config: Res<GameConfig>,
    player: Option<Res<Player>>,
    actors: Query<(Option<&Sprite>, Option<&Velocity>, Option<&Movement>)>,
    mut commands: Commands,
) {
    let Some(player) = player else {
        return;
    };
    let actor = player.0;
    let Ok((sprite, velocity, movement)) = actors.get(actor) else {
        return;
    };

    let mut mode = match (velocity, movement) {
        (Some(velocity), None) => Mode::Inertial(*velocity),
        (None, Some(movement)) => Mode::Direct(*movement),
        _ => Mode::Neither,
    };

    for event in &input.events {
        match *event {
            InputEvent::KeyDown {
                key: Key::Space,
                repeat: false,
            } => {
                let Some(sprite) = sprite else {
                    continue;
                };
                let bullet = commands
                    .spawn(bullet_bundle(sprite.center(), input.pointer, &config))
                    .id();
                debug!("Bullet {} fired by {}", bullet, actor);
            }
            InputEvent::KeyDown {
                key: Key::LeftShift,
                repeat: false,
            } => {
                if let Mode::Inertial(velocity) = mode {
                    let movement = to_movement(&velocity, config.run_speed);
                    commands
                        .entity(actor)
                        .remove::<Velocity>()
                        .insert(movement);
                    mode = Mode::Direct(movement);
                    debug!("{} switched to movement mode", actor);
                }
            }
            InputEvent::KeyUp {
                key: Key::LeftShift,
                repeat: false,
            } => {
                if let Mode::Direct(movement) = mode {
                    let velocity = to_velocity(
                        &movement,
                        config.boost_speed,
                        config.drag,
                        config.accel_speed,
                    );
                    commands
                        .entity(actor)
                        .remove::<Movement>()
                        .insert(velocity);
                    mode = Mode::Inertial(velocity);
                    debug!("{} switched to velocity mode", actor);
                }
            }
            _ => {}
        }
    }
}

/// Components of a bullet fired from `center` toward `pointer`.
///
/// A pointer exactly on `center` gives a bullet with no direction.
pub fn bullet_bundle(
    center: (f32, f32),
    pointer: (f32, f32),
    config: &GameConfig,
) -> (Sprite, Movement, Lifespan, CollisionTag) {
    let (dir_x, dir_y) =
        normalize(pointer.0 - center.0, pointer.1 - center.1).unwrap_or((0.0, 0.0));
    let (w, h) = (config.bullet_width, config.bullet_height);
    (
        Sprite::new(
            Rect::new(center.0 - w / 2.0, center.1 - h / 2.0, w, h),
            SpriteTexture::Bullet,
            facing_angle(center, pointer),
        ),
        Movement::new(dir_x, dir_y, config.bullet_speed),
        Lifespan::new(config.bullet_lifespan),
        CollisionTag::Bullet,
    )
}

/// Direct motion along `velocity`'s heading at `run_speed`.
pub fn to_movement(velocity: &Velocity, run_speed: f32) -> Movement {
    let (dir_x, dir_y) = normalize(velocity.vx, velocity.vy).unwrap_or((0.0, 0.0));
    Movement::new(dir_x, dir_y, run_speed)
}

/// Inertial motion along `movement`'s heading with magnitude `boost_speed`.
pub fn to_velocity(movement: &Movement, boost_speed: f32, drag: f32, accel_speed: f32) -> Velocity {
    let (dir_x, dir_y) = movement.direction().unwrap_or((0.0, 0.0));
    Velocity::new(dir_x * boost_speed, dir_y * boost_speed, drag, accel_speed)
}
