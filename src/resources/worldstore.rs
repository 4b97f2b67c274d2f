//! Store of loaded worlds.
//!
//! Replaces the usual pile of process-wide statics with an ECS resource: the
//! simulation thread owns the store, and background loaders hand finished
//! [`GameWorld`] snapshots to it through the world-I/O bridge. Slot ids and
//! validation mirror [`GameWorld`]'s own level slots.

use bevy_ecs::prelude::Resource;
use log::{error, warn};

use crate::resources::gameworld::{GameWorld, SLOT_COUNT};

/// The up-to-five currently loaded worlds, indexed by world id.
#[derive(Resource, Debug, Default)]
pub struct WorldStore {
    worlds: [Option<GameWorld>; SLOT_COUNT],
}

impl WorldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff at least one world slot is populated.
    pub fn contains_loaded_worlds(&self) -> bool {
        self.worlds.iter().any(Option::is_some)
    }

    /// All world slots, in id order.
    pub fn worlds(&self) -> &[Option<GameWorld>; SLOT_COUNT] {
        &self.worlds
    }

    /// The world in slot `id`, or `None` when empty or out of range (logged).
    pub fn get_world(&self, id: u8) -> Option<&GameWorld> {
        if id as usize >= SLOT_COUNT {
            error!(
                "Could not retrieve world {} - invalid world id (must be 0 to 4)",
                id
            );
            return None;
        }
        self.worlds[id as usize].as_ref()
    }

    /// Mutable access to the world in slot `id`, same validation as
    /// [`WorldStore::get_world`].
    pub fn get_world_mut(&mut self, id: u8) -> Option<&mut GameWorld> {
        if id as usize >= SLOT_COUNT {
            error!(
                "Could not retrieve world {} - invalid world id (must be 0 to 4)",
                id
            );
            return None;
        }
        self.worlds[id as usize].as_mut()
    }

    /// Place `world` in the slot matching its id.
    ///
    /// Out-of-range ids are logged no-ops; overwriting an occupied slot is
    /// permitted with a warning.
    pub fn add_world(&mut self, world: GameWorld) {
        let id = world.id();
        if id as usize >= SLOT_COUNT {
            error!(
                "Failed to add world {} - invalid world id (must be 0 to 4)",
                id
            );
            return;
        }
        if self.worlds[id as usize].is_some() {
            warn!("Overwriting world {}", id);
        }
        self.worlds[id as usize] = Some(world);
    }

    /// Clear the slot with the given id. Out-of-range or empty slots are
    /// logged no-ops.
    pub fn delete_world(&mut self, id: u8) {
        if id as usize >= SLOT_COUNT {
            error!(
                "Failed to delete world {} - invalid world id (must be 0 to 4)",
                id
            );
            return;
        }
        if self.worlds[id as usize].is_none() {
            error!("Failed to delete world {} - world does not exist", id);
            return;
        }
        self.worlds[id as usize] = None;
    }
}
