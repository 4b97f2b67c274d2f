//! Collision event and the contact-damage observer.
//!
//! The collision system triggers [`CollisionEvent`] whenever two kinematic
//! bodies overlap. Observers subscribe to react in a decoupled manner; the
//! one shipped here applies
//! [`ContactDamage`](crate::components::contactdamage::ContactDamage) to
//! [`Health`](crate::components::health::Health).

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::contactdamage::ContactDamage;
use crate::components::health::Health;

/// Event fired when two kinematic bodies overlap.
///
/// The two fields are the entity ids of the participants; no ordering
/// guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Global observer that applies contact damage when two entities touch.
///
/// For each direction of the pair: if one side deals contact damage and the
/// other has health, the damage is applied. Victims that run out of health
/// despawn, as do dealers flagged to expire on collision.
pub fn observe_contact_damage(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    dealers: Query<&ContactDamage>,
    mut victims: Query<&mut Health>,
) {
    let a = trigger.event().a;
    let b = trigger.event().b;

    for (dealer, victim) in [(a, b), (b, a)] {
        let Ok(contact) = dealers.get(dealer) else {
            continue;
        };
        let Ok(mut health) = victims.get_mut(victim) else {
            continue;
        };
        health.apply_damage(contact.damage);
        debug!(
            "{:?} dealt {} contact damage to {:?} ({}/{} left)",
            dealer, contact.damage, victim, health.current, health.max
        );
        if health.is_dead() {
            commands.entity(victim).despawn();
        }
        if contact.expires_on_collision {
            commands.entity(dealer).despawn();
        }
    }
}
