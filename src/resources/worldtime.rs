use bevy_ecs::prelude::Resource;

/// Simulation clock. Systems read only `delta`, the length of the current
/// frame in seconds.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}
