//! Input-controlled movement component.
//!
//! Marks an entity as steered by the shared
//! [`InputState`](crate::resources::input::InputState) and carries its
//! movement tunables. The
//! [`platform controller`](crate::systems::inputcontroller) system reads this
//! component to write walk velocity and jump impulses into the entity's
//! [`KinematicBody`](super::kinematicbody::KinematicBody).

use bevy_ecs::prelude::Component;

/// Movement tunables for an input-steered platformer entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Horizontal walk speed in pixels per second.
    pub walk_speed: f32,
    /// Vertical impulse in pixels per tick applied on jump.
    pub jump_impulse: f32,
}

impl InputControlled {
    /// Create an InputControlled component with the specified tunables.
    pub fn new(walk_speed: f32, jump_impulse: f32) -> Self {
        Self {
            walk_speed,
            jump_impulse,
        }
    }
}
