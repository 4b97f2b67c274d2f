//! Commands and messages for the background world-I/O thread.
//!
//! Bulk level/world load and save run on a dedicated worker thread so disk
//! I/O never stalls the frame loop. Commands carry owned data (paths, world
//! snapshots) into the worker; messages carry fully-built [`GameWorld`]
//! snapshots back out. The simulation side only ever installs finished
//! snapshots, so the worker and the frame loop never share mutable state.

use std::path::PathBuf;

use bevy_ecs::message::Message;

use crate::resources::gameworld::GameWorld;

/// Commands sent *to* the world-I/O thread.
#[derive(Message, Debug, Clone)]
pub enum WorldIoCmd {
    /// Load (or create) every world slot under `root`.
    LoadWorlds { root: PathBuf },
    /// Load (or create) the single world `id` under `root`.
    LoadWorld { root: PathBuf, id: u8 },
    /// Write one world snapshot to disk.
    SaveWorld { root: PathBuf, world: GameWorld },
    /// Write several world snapshots to disk.
    SaveWorlds { root: PathBuf, worlds: Vec<GameWorld> },
    /// Remove a world's directory and everything in it.
    DeleteWorld { root: PathBuf, id: u8 },
    Shutdown,
}

/// Messages sent *back* from the world-I/O thread.
#[derive(Message, Debug, Clone)]
pub enum WorldIoMessage {
    /// A world finished loading; the snapshot is ready to install.
    WorldLoaded { world: GameWorld },
    /// Every slot requested by a bulk load has been reported.
    LoadFinished,
    WorldSaved { id: u8 },
    WorldDeleted { id: u8 },
}
