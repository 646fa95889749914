//! Random source for spawn jitter.

use bevy_ecs::prelude::Resource;

/// Wraps a [`fastrand::Rng`] so spawn placement can be seeded for
/// reproducible runs and tests.
#[derive(Resource, Debug, Clone)]
pub struct SpawnRng(pub fastrand::Rng);

impl Default for SpawnRng {
    fn default() -> Self {
        SpawnRng(fastrand::Rng::new())
    }
}

impl SpawnRng {
    pub fn with_seed(seed: u64) -> Self {
        SpawnRng(fastrand::Rng::with_seed(seed))
    }

    /// Uniform integer in `[0, span)` as a float; `0.0` when `span < 1`.
    pub fn jitter(&mut self, span: f32) -> f32 {
        let span = span.abs() as u32;
        if span == 0 {
            0.0
        } else {
            self.0.u32(..span) as f32
        }
    }
}
