//! Entity-overlap collision detection.
//!
//! Tile collision is handled inside the movement pass; this system covers
//! entity-versus-entity contact. It AABB-tests every pair of kinematic
//! bodies after movement has settled and triggers a
//! [`CollisionEvent`](crate::events::collision::CollisionEvent) per
//! overlapping pair for observers to react to (contact damage, pickups,
//! sounds).

use bevy_ecs::prelude::*;

use crate::components::kinematicbody::KinematicBody;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

/// Detect overlapping body pairs and trigger a [`CollisionEvent`] for each.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &KinematicBody)>,
    mut commands: Commands,
) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [(entity_a, position_a, body_a), (entity_b, position_b, body_b)] in
        query.iter_combinations()
    {
        if body_a.overlaps(position_a.pos, body_b, position_b.pos) {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}
