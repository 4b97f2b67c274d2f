//! Kinematic body component.
//!
//! The [`KinematicBody`] component stores the velocity, collision box and
//! movement flags of an entity. Velocity is the displacement proposed for the
//! current tick, in pixels; input systems write into it, gravity integration
//! decays its vertical part, and the tile collision resolver clamps it before
//! the movement system applies it to the entity's
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Default vertical velocity lost per second while still moving upward.
///
/// Deliberately larger than [`DEFAULT_GRAVITY_FALL`]: a jump decays sharply
/// near its apex and the fall back down stays gentler.
pub const DEFAULT_GRAVITY_RISE: f32 = 34.0;
/// Default vertical velocity lost per second while moving downward.
pub const DEFAULT_GRAVITY_FALL: f32 = 20.0;

/// Velocity, collision box and movement flags of an entity.
///
/// # Fields
/// - `velocity` - Proposed displacement for the current tick, in pixels
/// - `size` - Width/height of the collision box, in pixels
/// - `can_fly` - Gravity integration is skipped entirely
/// - `can_penetrate_objects` - Tile collision resolution is skipped entirely
/// - `airborne` - Not currently resting on solid ground
/// - `gravity_rise`/`gravity_fall` - Per-body decay rate tunables
#[derive(Component, Clone, Debug)]
pub struct KinematicBody {
    /// Proposed displacement for the current tick, in pixels.
    pub velocity: Vec2,
    /// Width and height of the collision box, in pixels.
    pub size: Vec2,
    /// When true, gravity does not act on this body.
    pub can_fly: bool,
    /// When true, the body moves unconstrained by tile geometry.
    pub can_penetrate_objects: bool,
    /// True while the body is not resting on a solid tile below it. Set by a
    /// jump impulse, cleared by a downward collision or the floor boundary.
    pub airborne: bool,
    /// Vertical velocity lost per second while `velocity.y > 0`.
    pub gravity_rise: f32,
    /// Vertical velocity lost per second once `velocity.y <= 0`.
    pub gravity_fall: f32,
}

impl KinematicBody {
    /// Create a grounded, gravity-bound, non-penetrating body of the given
    /// box size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            size: Vec2::new(width, height),
            can_fly: false,
            can_penetrate_objects: false,
            airborne: false,
            gravity_rise: DEFAULT_GRAVITY_RISE,
            gravity_fall: DEFAULT_GRAVITY_FALL,
        }
    }

    /// Builder: the body ignores gravity.
    pub fn flying(mut self) -> Self {
        self.can_fly = true;
        self
    }

    /// Builder: the body passes through tiles regardless of their
    /// penetrability.
    pub fn penetrating(mut self) -> Self {
        self.can_penetrate_objects = true;
        self
    }

    /// Builder: override the gravity decay rates.
    pub fn with_gravity_rates(mut self, rise: f32, fall: f32) -> Self {
        self.gravity_rise = rise;
        self.gravity_fall = fall;
        self
    }

    /// Add a displacement to the proposed velocity.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.velocity.x += dx;
        self.velocity.y += dy;
    }

    /// Launch the body upward with the given impulse and mark it airborne.
    pub fn jump(&mut self, impulse: f32) {
        self.velocity.y = impulse;
        self.airborne = true;
    }

    /// Integrate gravity for `dt` seconds.
    ///
    /// No-op for flying bodies. Applies the larger decay rate while the body
    /// still moves upward and the smaller one once it moves downward or is
    /// stationary, producing the asymmetric jump arc.
    pub fn apply_gravity(&mut self, dt: f32) {
        if self.can_fly {
            return;
        }
        if self.velocity.y > 0.0 {
            self.velocity.y -= self.gravity_rise * dt;
        } else {
            self.velocity.y -= self.gravity_fall * dt;
        }
    }

    /// Returns (min, max) of the body's AABB at a given position.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        (position, position + self.size)
    }

    /// AABB overlap test against another body at a different position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== CONSTRUCTOR TESTS ====================

    #[test]
    fn test_new_body_is_grounded_and_solid() {
        let body = KinematicBody::new(28.0, 28.0);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(approx_eq(body.size.x, 28.0));
        assert!(approx_eq(body.size.y, 28.0));
        assert!(!body.can_fly);
        assert!(!body.can_penetrate_objects);
        assert!(!body.airborne);
    }

    #[test]
    fn test_builders() {
        let body = KinematicBody::new(8.0, 8.0).flying().penetrating();
        assert!(body.can_fly);
        assert!(body.can_penetrate_objects);
        let body = KinematicBody::new(8.0, 8.0).with_gravity_rates(2.0, 1.0);
        assert!(approx_eq(body.gravity_rise, 2.0));
        assert!(approx_eq(body.gravity_fall, 1.0));
    }

    // ==================== GRAVITY TESTS ====================

    #[test]
    fn test_gravity_uses_rise_rate_while_ascending() {
        let mut body = KinematicBody::new(8.0, 8.0).with_gravity_rates(2.0, 1.0);
        body.velocity.y = 3.0;
        body.apply_gravity(1.0);
        assert!(approx_eq(body.velocity.y, 1.0));
    }

    #[test]
    fn test_gravity_uses_fall_rate_while_descending() {
        let mut body = KinematicBody::new(8.0, 8.0).with_gravity_rates(2.0, 1.0);
        body.velocity.y = -1.0;
        body.apply_gravity(1.0);
        assert!(approx_eq(body.velocity.y, -2.0));
    }

    #[test]
    fn test_gravity_switches_regime_exactly_at_zero_crossing() {
        let mut body = KinematicBody::new(8.0, 8.0).with_gravity_rates(2.0, 1.0);
        body.velocity.y = 3.0;
        body.apply_gravity(1.0); // rising: 3 -> 1
        assert!(approx_eq(body.velocity.y, 1.0));
        body.apply_gravity(1.0); // still rising: 1 -> -1
        assert!(approx_eq(body.velocity.y, -1.0));
        body.apply_gravity(1.0); // now falling: -1 -> -2
        assert!(approx_eq(body.velocity.y, -2.0));
        body.apply_gravity(1.0);
        assert!(approx_eq(body.velocity.y, -3.0));
    }

    #[test]
    fn test_gravity_is_strictly_monotonic() {
        let mut body = KinematicBody::new(8.0, 8.0);
        body.velocity.y = 12.0;
        let mut previous = body.velocity.y;
        for _ in 0..120 {
            body.apply_gravity(1.0 / 60.0);
            assert!(body.velocity.y < previous);
            previous = body.velocity.y;
        }
    }

    #[test]
    fn test_gravity_skipped_for_flying_bodies() {
        let mut body = KinematicBody::new(8.0, 8.0).flying();
        body.velocity.y = 5.0;
        body.apply_gravity(1.0);
        assert!(approx_eq(body.velocity.y, 5.0));
    }

    // ==================== VELOCITY TESTS ====================

    #[test]
    fn test_translate_accumulates() {
        let mut body = KinematicBody::new(8.0, 8.0);
        body.translate(3.0, 1.0);
        body.translate(-1.0, 2.0);
        assert!(approx_eq(body.velocity.x, 2.0));
        assert!(approx_eq(body.velocity.y, 3.0));
    }

    #[test]
    fn test_jump_sets_impulse_and_airborne() {
        let mut body = KinematicBody::new(8.0, 8.0);
        body.jump(12.0);
        assert!(approx_eq(body.velocity.y, 12.0));
        assert!(body.airborne);
    }

    // ==================== AABB TESTS ====================

    #[test]
    fn test_overlaps() {
        let a = KinematicBody::new(10.0, 10.0);
        let b = KinematicBody::new(10.0, 10.0);
        assert!(a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(5.0, 5.0)));
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(20.0, 0.0)));
        // Touching edges do not overlap.
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(10.0, 0.0)));
    }
}
