//! Damage-on-contact component.
//!
//! Attached to entities that hurt whatever they touch. Projectiles set
//! `expires_on_collision` so they despawn after dealing their damage;
//! persistent hazards keep dealing it on every contact.

use bevy_ecs::prelude::Component;

/// Damage dealt to entities with [`Health`](super::health::Health) on
/// contact.
#[derive(Component, Clone, Copy, Debug)]
pub struct ContactDamage {
    /// Amount subtracted from the victim's health per contact.
    pub damage: i32,
    /// Despawn this entity after its first contact.
    pub expires_on_collision: bool,
}

impl ContactDamage {
    /// Create a persistent contact hazard.
    pub fn new(damage: i32) -> Self {
        Self {
            damage,
            expires_on_collision: false,
        }
    }

    /// Builder: despawn after the first contact.
    pub fn expiring(mut self) -> Self {
        self.expires_on_collision = true;
        self
    }
}
