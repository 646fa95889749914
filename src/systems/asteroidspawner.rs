//! Asteroid spawner system.
//!
//! Each [`AsteroidSpawner`] counts down by the frame delta. When its timer
//! runs out it is reset to the spawner's delay and one asteroid is created:
//!
//! - placed just beyond the screen edge opposite to the travel direction,
//!   jittered along the perpendicular axis (see [`spawn_position`]);
//! - sized by the spawner;
//! - moving along the spawner's direction at the configured asteroid speed;
//! - with a lifespan so asteroids that miss everything eventually go away.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::asteroidspawner::AsteroidSpawner;
use crate::components::collisiontag::CollisionTag;
use crate::components::lifespan::Lifespan;
use crate::components::movement::Movement;
use crate::components::sprite::{Rect, Sprite, SpriteTexture};
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawnrng::SpawnRng;
use crate::resources::worldtime::WorldTime;

pub fn asteroid_spawner_system(
    mut spawners: Query<(Entity, &mut AsteroidSpawner)>,
    mut rng: ResMut<SpawnRng>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (spawner_entity, mut spawner) in spawners.iter_mut() {
        if !spawner.tick(dt) {
            continue;
        }
        let bundle = asteroid_bundle(&mut rng, &spawner, &screen, &config);
        let asteroid = commands.spawn(bundle).id();
        debug!("Spawner {} spawned asteroid {}", spawner_entity, asteroid);
    }
}

/// Top-left corner for a new asteroid.
///
/// Along the travel axis the asteroid starts fully off-screen on the side it
/// comes from. Along the other axis it is offset by `jitter`, which the caller
/// draws from `[0, |1 + d * (extent - size)|)` for that axis (see
/// [`jitter_spans`]).
pub fn spawn_position(
    spawner: &AsteroidSpawner,
    screen: &ScreenSize,
    jitter: (f32, f32),
) -> (f32, f32) {
    let (dx, dy) = spawner.direction;
    let (w, h) = spawner.size;
    let half_w = screen.w / 2.0;
    let half_h = screen.h / 2.0;
    let x = half_w - (half_w + w) * dx + jitter.0 - half_w * dy.abs();
    let y = half_h - (half_h + h) * dy + jitter.1 - half_h * dx.abs();
    (x, y)
}

/// Jitter ranges for the x and y placement of a spawned asteroid.
pub fn jitter_spans(spawner: &AsteroidSpawner, screen: &ScreenSize) -> (f32, f32) {
    let (dx, dy) = spawner.direction;
    let (w, h) = spawner.size;
    (1.0 + dy * (screen.w - w), 1.0 + dx * (screen.h - h))
}

/// Components of one asteroid for `spawner`, with placement jitter drawn
/// from `rng`.
pub fn asteroid_bundle(
    rng: &mut SpawnRng,
    spawner: &AsteroidSpawner,
    screen: &ScreenSize,
    config: &GameConfig,
) -> (Sprite, Movement, Lifespan, CollisionTag) {
    let (span_x, span_y) = jitter_spans(spawner, screen);
    let jitter = (rng.jitter(span_x), rng.jitter(span_y));
    let (x, y) = spawn_position(spawner, screen, jitter);
    let (w, h) = spawner.size;
    let (dx, dy) = spawner.direction;
    (
        Sprite::new(Rect::new(x, y, w, h), SpriteTexture::Asteroid, 0.0),
        Movement::new(dx, dy, config.asteroid_speed),
        Lifespan::new(config.asteroid_lifespan),
        CollisionTag::Asteroid,
    )
}
