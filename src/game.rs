//! Frame orchestration.
//!
//! [`Simulation`] owns the bevy [`World`] holding every resource, and the
//! [`Schedule`] that runs the systems. A driver calls
//! [`Simulation::advance`] once per frame with the elapsed time and the
//! events polled since the last frame, then draws
//! [`Simulation::sprites`].

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::{info, trace};

use crate::components::asteroidspawner::AsteroidSpawner;
use crate::components::collisiontag::CollisionTag;
use crate::components::controller::Controller;
use crate::components::sprite::{Rect, Sprite, SpriteTexture};
use crate::components::tracking::Tracking;
use crate::components::velocity::Velocity;
use crate::events::input::InputEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::FrameInput;
use crate::resources::player::Player;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawnrng::SpawnRng;
use crate::resources::worldtime::WorldTime;
use crate::systems::asteroidspawner::asteroid_spawner_system;
use crate::systems::collision::collision_system;
use crate::systems::controller::controller_system;
use crate::systems::lifespan::lifespan_system;
use crate::systems::mobility::mobility_system;
use crate::systems::playeraction::player_action_system;
use crate::systems::rotation::rotation_system;
use crate::systems::time::update_world_time;
use crate::systems::tracking::tracking_system;
use crate::systems::velocity::velocity_system;

/// Player sprite size in pixels.
const PLAYER_SIZE: (f32, f32) = (52.0, 30.0);
/// Initial player angle; replaced by tracking on the first frame.
const PLAYER_START_ANGLE: f32 = 200.0;
const ASTEROID_SIZE: (f32, f32) = (40.0, 40.0);

/// `(initial timer, delay, direction)` of the four starting spawners.
const SPAWNERS: [(f32, f32, (f32, f32)); 4] = [
    (2.0, 2.0, (1.0, 0.0)),
    (5.0, 1.5, (-1.0, 0.0)),
    (7.0, 2.0, (0.0, -1.0)),
    (10.0, 1.5, (0.0, 1.0)),
];

/// Build the per-frame pipeline.
///
/// The order is fixed and the systems run one at a time. `.chain()` puts a
/// command sync point between consecutive systems, so entities spawned or
/// despawned by one system are visible to the next. Collision runs before
/// lifespan so that anything it destroys is gone by the end of the same
/// frame.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            controller_system,
            player_action_system,
            asteroid_spawner_system,
            velocity_system,
            mobility_system,
            collision_system,
            lifespan_system,
            tracking_system,
            rotation_system,
        )
            .chain(),
    );
    schedule
}

/// A world with every resource the pipeline reads, and no entities.
pub fn make_world(config: GameConfig, rng: SpawnRng) -> World {
    let (w, h) = config.screen_size();
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(FrameInput::default());
    world.insert_resource(ScreenSize { w, h });
    world.insert_resource(rng);
    world.insert_resource(config);
    world
}

/// Spawn the player and the starting asteroid spawners. Returns the player.
pub fn spawn_scene(world: &mut World, config: &GameConfig) -> Entity {
    let player = world
        .spawn((
            Sprite::new(
                Rect::new(0.0, 0.0, PLAYER_SIZE.0, PLAYER_SIZE.1),
                SpriteTexture::Player,
                PLAYER_START_ANGLE,
            ),
            Velocity::new(0.0, 0.0, config.drag, config.accel_speed),
            Controller::new(),
            Tracking::mouse(),
            CollisionTag::Player,
        ))
        .id();

    for (timer, delay, direction) in SPAWNERS {
        world.spawn(AsteroidSpawner::new(timer, delay, direction, ASTEROID_SIZE));
    }

    info!(
        "Scene ready: player {}, {} asteroid spawners",
        player,
        SPAWNERS.len()
    );
    player
}

/// The running game: world, pipeline, and the player handle.
pub struct Simulation {
    world: World,
    schedule: Schedule,
    player: Entity,
}

impl Simulation {
    /// New simulation with the starting scene already spawned.
    pub fn new(config: GameConfig, rng: SpawnRng) -> Self {
        let mut world = make_world(config.clone(), rng);
        let player = spawn_scene(&mut world, &config);
        world.insert_resource(Player(player));

        let mut schedule = build_schedule();
        schedule
            .initialize(&mut world)
            .expect("Failed to initialize schedule");

        Simulation {
            world,
            schedule,
            player,
        }
    }

    /// Run one frame: store the frame's input, advance time by `dt`, then
    /// run every system once in order.
    pub fn advance(&mut self, dt: f32, events: Vec<InputEvent>, pointer: (f32, f32)) {
        self.world.resource_mut::<FrameInput>().set(events, pointer);
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        trace!(
            "frame {} dt={:.4}",
            self.world.resource::<WorldTime>().frame_count,
            dt
        );
    }

    /// Whether the last frame's input asked to quit.
    pub fn quit_requested(&self) -> bool {
        self.world.resource::<FrameInput>().quit_requested()
    }

    /// Snapshot of every sprite, ordered by entity.
    pub fn sprites(&mut self) -> Vec<(Entity, Sprite)> {
        let mut query = self.world.query::<(Entity, &Sprite)>();
        let mut sprites: Vec<(Entity, Sprite)> = query
            .iter(&self.world)
            .map(|(entity, sprite)| (entity, *sprite))
            .collect();
        sprites.sort_by_key(|(entity, _)| *entity);
        sprites
    }

    /// Entities carrying `tag`, ordered by entity.
    pub fn tagged(&mut self, tag: CollisionTag) -> Vec<Entity> {
        let mut query = self.world.query::<(Entity, &CollisionTag)>();
        let mut entities: Vec<Entity> = query
            .iter(&self.world)
            .filter(|(_, t)| **t == tag)
            .map(|(entity, _)| entity)
            .collect();
        entities.sort();
        entities
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    /// The player counts as alive while it still has a sprite.
    pub fn player_alive(&self) -> bool {
        self.world.get::<Sprite>(self.player).is_some()
    }

    pub fn time(&self) -> WorldTime {
        *self.world.resource::<WorldTime>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
