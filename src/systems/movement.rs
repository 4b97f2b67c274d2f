//! Per-tick kinematic body integration.
//!
//! For every entity with a position and a kinematic body: integrate gravity,
//! resolve the proposed displacement against the active level's tiles, then
//! apply it. Runs to completion once per frame on the simulation thread; the
//! resolver's horizontal-before-vertical ordering happens inside
//! [`resolve_tile_collisions`].

use bevy_ecs::prelude::*;

use crate::components::kinematicbody::KinematicBody;
use crate::components::mapposition::MapPosition;
use crate::resources::activelevel::ActiveLevel;
use crate::resources::worldtime::WorldTime;
use crate::systems::tilecollision::resolve_tile_collisions;

/// Advance every kinematic body by one tick.
///
/// With no active level published, bodies move unconstrained by tile
/// geometry (gravity still applies).
pub fn movement(
    mut query: Query<(&mut MapPosition, &mut KinematicBody)>,
    time: Res<WorldTime>,
    active: Res<ActiveLevel>,
) {
    for (mut position, mut body) in query.iter_mut() {
        body.apply_gravity(time.delta);
        if let Some(level) = active.level() {
            resolve_tile_collisions(level, &mut position.pos, &mut body);
        }
        let velocity = body.velocity;
        position.pos += velocity;
    }
}
