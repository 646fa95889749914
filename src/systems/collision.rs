//! Collision resolution.
//!
//! Every pair of distinct entities that both have a collision tag and a
//! sprite, and whose rectangles overlap, is looked up in the resolution table
//! of [`resolve`]. The table is symmetric, so visiting each unordered pair
//! once gives the same outcome as visiting both orderings.
//!
//! Destruction only schedules removal by setting the entity's lifespan to
//! zero. The lifespan system runs after this one and performs the removal in
//! the same frame.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::collisiontag::CollisionTag;
use crate::components::lifespan::Lifespan;
use crate::components::sprite::Sprite;

/// Outcome of an overlapping `(first, second)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Ignore,
    DestroyFirst,
    DestroySecond,
    DestroyBoth,
}

impl Resolution {
    fn destroys_first(self) -> bool {
        matches!(self, Resolution::DestroyFirst | Resolution::DestroyBoth)
    }

    fn destroys_second(self) -> bool {
        matches!(self, Resolution::DestroySecond | Resolution::DestroyBoth)
    }
}

/// Resolution table keyed by tag pair.
///
/// | first | second | effect |
/// |---|---|---|
/// | asteroid | player | destroy player |
/// | asteroid | bullet | destroy both |
/// | player | asteroid | destroy player |
/// | bullet | asteroid | destroy both |
/// | anything else | | nothing |
pub fn resolve(first: CollisionTag, second: CollisionTag) -> Resolution {
    use CollisionTag::*;
    match (first, second) {
        (Asteroid, Player) => Resolution::DestroySecond,
        (Player, Asteroid) => Resolution::DestroyFirst,
        (Asteroid, Bullet) | (Bullet, Asteroid) => Resolution::DestroyBoth,
        _ => Resolution::Ignore,
    }
}

pub fn collision_system(
    query: Query<(Entity, &CollisionTag, &Sprite, Option<&Lifespan>)>,
    mut commands: Commands,
) {
    let mut doomed: Vec<(Entity, CollisionTag, bool)> = Vec::new();

    for [(entity_a, tag_a, sprite_a, life_a), (entity_b, tag_b, sprite_b, life_b)] in
        query.iter_combinations::<2>()
    {
        if !sprite_a.rect.intersects(&sprite_b.rect) {
            continue;
        }
        let resolution = resolve(*tag_a, *tag_b);
        if resolution.destroys_first() {
            doomed.push((entity_a, *tag_a, life_a.is_some_and(|l| l.is_expired())));
        }
        if resolution.destroys_second() {
            doomed.push((entity_b, *tag_b, life_b.is_some_and(|l| l.is_expired())));
        }
    }

    doomed.sort_by_key(|(entity, _, _)| *entity);
    doomed.dedup_by_key(|(entity, _, _)| *entity);
    for (entity, tag, already_expired) in doomed {
        commands.entity(entity).insert(Lifespan::expired());
        if already_expired {
            continue;
        }
        match tag {
            CollisionTag::Player => info!("Player {} destroyed", entity),
            _ => debug!("{:?} {} destroyed by collision", tag, entity),
        }
    }
}
