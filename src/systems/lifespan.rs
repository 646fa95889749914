//! Lifespan system.
//!
//! Counts every [`Lifespan`] down by the frame delta and despawns entities
//! whose lifespan reaches zero or below. The pipeline applies the despawns
//! before the next system runs, so systems later in the frame no longer see
//! them.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::lifespan::Lifespan;
use crate::resources::worldtime::WorldTime;

pub fn lifespan_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Lifespan)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut lifespan) in query.iter_mut() {
        lifespan.remaining -= dt;
        if lifespan.is_expired() {
            commands.entity(entity).try_despawn();
            debug!("Entity {} expired", entity);
        }
    }
}
