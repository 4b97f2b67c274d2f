//! Health component.
//!
//! Attached to any entity that can be damaged and killed (the player, future
//! NPCs). Peaceful entities simply never receive damage.

use bevy_ecs::prelude::Component;

/// Current and maximum health of an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    /// Current health, `0..=max`.
    pub current: i32,
    /// Health capacity.
    pub max: i32,
}

impl Health {
    /// Create a health pool filled to capacity.
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage, clamping at zero.
    pub fn apply_damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    /// Restore health, clamping at capacity.
    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// True once the health pool is exhausted.
    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}
