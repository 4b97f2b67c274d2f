//! Simulation clock resource.

use bevy_ecs::prelude::Resource;

/// Elapsed and per-frame simulation time, in seconds.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Total scaled time since startup.
    pub elapsed: f32,
    /// Scaled delta of the current frame.
    pub delta: f32,
    /// Multiplier applied to incoming frame deltas.
    pub time_scale: f32,
    /// Frames simulated since startup.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
