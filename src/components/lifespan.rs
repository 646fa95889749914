//! Countdown to destruction.
//!
//! The [`Lifespan`] component counts down each frame. When `remaining`
//! reaches zero or below the lifespan system despawns the entity, dropping
//! every component it carries.
//!
//! Setting `remaining` to `0.0` is how other systems schedule a destruction
//! (see [`crate::systems::collision`]); the removal itself always happens in
//! [`crate::systems::lifespan::lifespan_system`].

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Lifespan {
    /// Remaining time in seconds.
    pub remaining: f32,
}

impl Lifespan {
    /// Create a new Lifespan with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Lifespan { remaining: seconds }
    }

    /// A lifespan that ends on the next lifespan tick.
    pub fn expired() -> Self {
        Lifespan { remaining: 0.0 }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
