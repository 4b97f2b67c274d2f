use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position of an entity, in pixels. The pivot is the bottom-left
/// corner of the entity's box.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    /// Create a MapPosition from pixel coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
