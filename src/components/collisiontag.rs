//! Collision resolution class.
//!
//! Only entities carrying a [`CollisionTag`] and a sprite take part in
//! collision resolution. What happens on overlap is decided by the pair of
//! tags; see [`crate::systems::collision::resolve`].

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionTag {
    Player,
    Bullet,
    Asteroid,
}
