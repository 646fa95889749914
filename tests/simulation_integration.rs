//! Whole-frame tests driving the `Simulation` through its public API.

use bevy_ecs::prelude::*;

use asteroidgame::components::asteroidspawner::AsteroidSpawner;
use asteroidgame::components::collisiontag::CollisionTag;
use asteroidgame::components::controller::Controller;
use asteroidgame::components::lifespan::Lifespan;
use asteroidgame::components::movement::Movement;
use asteroidgame::components::sprite::{Rect, Sprite, SpriteTexture};
use asteroidgame::components::tracking::Tracking;
use asteroidgame::components::velocity::Velocity;
use asteroidgame::events::input::{InputEvent, Key};
use asteroidgame::game::Simulation;
use asteroidgame::resources::gameconfig::GameConfig;
use asteroidgame::resources::spawnrng::SpawnRng;

const DT: f32 = 1.0 / 60.0;

fn new_sim(seed: u64) -> Simulation {
    Simulation::new(GameConfig::new(), SpawnRng::with_seed(seed))
}

fn idle(sim: &mut Simulation, frames: u32) {
    for _ in 0..frames {
        sim.advance(DT, Vec::new(), (360.0, 240.0));
    }
}

fn is_alive(sim: &mut Simulation, entity: Entity) -> bool {
    sim.world_mut().get_entity(entity).is_ok()
}

#[test]
fn scene_starts_with_player_and_four_spawners() {
    let mut sim = new_sim(7);
    let player = sim.player();
    assert!(sim.player_alive());

    let world = sim.world_mut();
    let sprite = *world.get::<Sprite>(player).unwrap();
    assert_eq!(sprite.rect, Rect::new(0.0, 0.0, 52.0, 30.0));
    assert_eq!(sprite.angle, 200.0);
    assert_eq!(
        world.get::<Velocity>(player),
        Some(&Velocity::new(0.0, 0.0, 0.5, 600.0))
    );
    assert!(world.get::<Controller>(player).is_some());
    assert_eq!(world.get::<Tracking>(player), Some(&Tracking::mouse()));
    assert_eq!(world.get::<CollisionTag>(player), Some(&CollisionTag::Player));
    assert!(world.get::<Lifespan>(player).is_none());

    let mut spawners = world.query::<&AsteroidSpawner>();
    assert_eq!(spawners.iter(world).count(), 4);
    assert_eq!(sim.sprites().len(), 1);
}

#[test]
fn first_frame_turns_player_toward_pointer() {
    let mut sim = new_sim(7);
    // Player center is (26, 15); pointer straight below.
    sim.advance(DT, Vec::new(), (26.0, 215.0));
    let player = sim.player();
    let angle = sim.world_mut().get::<Sprite>(player).unwrap().angle;
    assert!((angle - 180.0).abs() < 1e-3);
}

#[test]
fn first_asteroid_appears_after_two_seconds() {
    let mut sim = new_sim(7);
    for _ in 0..3 {
        sim.advance(0.5, Vec::new(), (360.0, 240.0));
    }
    assert!(sim.tagged(CollisionTag::Asteroid).is_empty());

    sim.advance(0.5, Vec::new(), (360.0, 240.0));
    let asteroids = sim.tagged(CollisionTag::Asteroid);
    assert_eq!(asteroids.len(), 1);
    let texture = sim.world_mut().get::<Sprite>(asteroids[0]).unwrap().texture;
    assert_eq!(texture, SpriteTexture::Asteroid);
}

#[test]
fn fired_bullet_expires_after_its_lifespan() {
    let mut sim = new_sim(7);
    sim.advance(DT, vec![InputEvent::key_down(Key::Space)], (360.0, 15.0));

    let bullets = sim.tagged(CollisionTag::Bullet);
    assert_eq!(bullets.len(), 1);
    let bullet = bullets[0];
    // Mobility runs after the action, so the bullet already moved this frame.
    let x = sim.world_mut().get::<Sprite>(bullet).unwrap().rect.x;
    assert!(x > 19.0);

    for _ in 0..5 {
        sim.advance(0.25, Vec::new(), (360.0, 15.0));
    }
    assert!(!is_alive(&mut sim, bullet));
    assert!(sim.player_alive());
}

#[test]
fn asteroid_hit_removes_player_in_the_same_frame() {
    let mut sim = new_sim(7);
    let player = sim.player();
    let asteroid = sim
        .world_mut()
        .spawn((
            Sprite::new(Rect::new(10.0, 0.0, 40.0, 40.0), SpriteTexture::Asteroid, 0.0),
            CollisionTag::Asteroid,
            Lifespan::new(5.0),
        ))
        .id();

    sim.advance(DT, Vec::new(), (360.0, 240.0));

    assert!(!sim.player_alive());
    assert!(!is_alive(&mut sim, player));
    assert!(is_alive(&mut sim, asteroid));
}

#[test]
fn destroyed_player_cannot_act() {
    let mut sim = new_sim(7);
    let player = sim.player();
    sim.world_mut().despawn(player);

    sim.advance(
        DT,
        vec![
            InputEvent::key_down(Key::Space),
            InputEvent::key_down(Key::LeftShift),
            InputEvent::key_down(Key::W),
        ],
        (100.0, 100.0),
    );

    assert!(sim.tagged(CollisionTag::Bullet).is_empty());
    assert!(!is_alive(&mut sim, player));
}

#[test]
fn tracker_ignores_target_destroyed_earlier_in_the_frame() {
    let mut sim = new_sim(7);
    let world = sim.world_mut();
    let asteroid = world
        .spawn((
            Sprite::new(Rect::new(300.0, 100.0, 40.0, 40.0), SpriteTexture::Asteroid, 0.0),
            CollisionTag::Asteroid,
        ))
        .id();
    let bullet = world
        .spawn((
            Sprite::new(Rect::new(310.0, 110.0, 14.0, 11.0), SpriteTexture::Bullet, 0.0),
            CollisionTag::Bullet,
        ))
        .id();
    let tracker = world
        .spawn((
            Sprite::new(Rect::new(400.0, 400.0, 10.0, 10.0), SpriteTexture::Bullet, 45.0),
            Tracking::entity(asteroid),
        ))
        .id();

    sim.advance(DT, Vec::new(), (0.0, 0.0));

    assert!(!is_alive(&mut sim, asteroid));
    assert!(!is_alive(&mut sim, bullet));
    assert_eq!(sim.world_mut().get::<Sprite>(tracker).unwrap().angle, 45.0);
}

#[test]
fn steering_keys_push_the_player() {
    let mut sim = new_sim(7);
    let player = sim.player();
    sim.advance(DT, vec![InputEvent::key_down(Key::D)], (360.0, 240.0));
    idle(&mut sim, 10);

    let world = sim.world_mut();
    assert!(world.get::<Velocity>(player).unwrap().vx > 0.0);
    let rect = world.get::<Sprite>(player).unwrap().rect;
    assert!(rect.x > 0.0);
    assert_eq!(rect.y, 0.0);
}

#[test]
fn shift_switches_player_between_modes() {
    let mut sim = new_sim(7);
    let player = sim.player();
    sim.advance(DT, vec![InputEvent::key_down(Key::D)], (360.0, 240.0));
    sim.advance(DT, vec![InputEvent::key_down(Key::LeftShift)], (360.0, 240.0));
    {
        let world = sim.world_mut();
        assert!(world.get::<Movement>(player).is_some());
        assert!(world.get::<Velocity>(player).is_none());
    }

    sim.advance(
        DT,
        vec![InputEvent::key_up(Key::D), InputEvent::key_up(Key::LeftShift)],
        (360.0, 240.0),
    );
    let world = sim.world_mut();
    assert!(world.get::<Movement>(player).is_none());
    assert!(world.get::<Velocity>(player).unwrap().vx > 0.0);
}

#[test]
fn quit_event_is_reported() {
    let mut sim = new_sim(7);
    sim.advance(DT, Vec::new(), (0.0, 0.0));
    assert!(!sim.quit_requested());
    sim.advance(DT, vec![InputEvent::Quit], (0.0, 0.0));
    assert!(sim.quit_requested());
}

#[test]
fn time_accumulates_over_frames() {
    let mut sim = new_sim(7);
    idle(&mut sim, 4);
    let time = sim.time();
    assert_eq!(time.frame_count, 4);
    assert!((time.elapsed - 4.0 * DT).abs() < 1e-6);
    assert_eq!(time.delta, DT);
}

#[test]
fn same_seed_same_game() {
    let mut a = new_sim(42);
    let mut b = new_sim(42);
    for _ in 0..12 * 60 {
        a.advance(DT, Vec::new(), (700.0, 470.0));
        b.advance(DT, Vec::new(), (700.0, 470.0));
    }
    assert_eq!(a.sprites(), b.sprites());
}

#[test]
fn every_live_entity_still_has_a_reason_to_exist() {
    let mut sim = new_sim(3);
    let player = sim.player();
    for frame in 0..15 * 60 {
        let events = if frame % 20 == 0 {
            vec![InputEvent::key_down(Key::Space)]
        } else {
            Vec::new()
        };
        sim.advance(DT, events, (360.0, 240.0));

        let world = sim.world_mut();
        let mut lifespans = world.query::<(Entity, &Lifespan)>();
        for (entity, lifespan) in lifespans.iter(world) {
            assert!(!lifespan.is_expired(), "entity {entity} survived expiry");
        }
        let mut sprites = world.query_filtered::<Entity, (With<Sprite>, Without<Lifespan>)>();
        for entity in sprites.iter(world) {
            assert_eq!(entity, player, "entity {entity} leaked");
        }
    }
}
