use bevy_ecs::prelude::*;

/// The entity the player's action keys act on (shooting, mode toggle).
///
/// The handle stays valid after the player is destroyed; lookups for it simply
/// stop finding components.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player(pub Entity);
