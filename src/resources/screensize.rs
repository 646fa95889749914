//! Screen size resource.
//!
//! The playfield dimensions in pixels. The asteroid spawner reads this to
//! place new asteroids just beyond the screen edges.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: f32,
    /// Height in pixels.
    pub h: f32,
}
