pub mod app;
pub mod board_init;
pub mod components;
pub mod config;
pub mod game;
pub mod logic;
pub mod matching;
pub mod physics;
pub mod systems;

#[cfg(test)]
mod tests;

use bevy_ecs::prelude::Resource;
use std::time::Duration;

/// Simulated clock. Advanced by whatever time step the driver supplies, never
/// by reading the wall clock.
#[derive(Resource, Debug, Clone, Default)]
pub struct Time {
    delta: Duration,
    elapsed: Duration,
}

impl Time {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step of `delta_seconds`. Negative or non-finite steps count as zero.
    pub fn advance(&mut self, delta_seconds: f32) {
        self.delta = Duration::try_from_secs_f32(delta_seconds).unwrap_or_default();
        self.elapsed += self.delta;
    }

    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}
