//! The currently active level.
//!
//! This resource is the one hook the collision engine has into the
//! surrounding game: the movement system resolves every kinematic body
//! against whatever level is published here. The handle is an
//! `Arc<Level>` snapshot — background loaders build levels off-thread and
//! the simulation thread swaps the handle in a single assignment, so the
//! resolver never observes a level mid-mutation.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;

use crate::resources::level::Level;

/// Handle to the level the simulation currently runs against.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActiveLevel {
    level: Option<Arc<Level>>,
}

impl ActiveLevel {
    /// Create the resource with no level published.
    pub fn new() -> Self {
        Self::default()
    }

    /// The published level, if any.
    pub fn level(&self) -> Option<&Arc<Level>> {
        self.level.as_ref()
    }

    /// Publish a new level snapshot, replacing any previous one.
    pub fn publish(&mut self, level: Arc<Level>) {
        self.level = Some(level);
    }

    /// Unpublish the current level. Bodies move unconstrained by tiles until
    /// a new one is published.
    pub fn clear(&mut self) {
        self.level = None;
    }
}
