//! World-I/O thread and the systems that bridge it with the ECS world.
//!
//! - [`world_io_thread`] runs on its own OS thread, owns all bulk level/world
//!   disk access, and processes [`WorldIoCmd`] messages, emitting
//!   [`WorldIoMessage`] responses carrying finished snapshots.
//! - [`poll_world_io_messages`] non-blockingly drains the worker's channel
//!   into the ECS message queue each frame.
//! - [`apply_world_io_messages`] installs loaded snapshots into the
//!   [`WorldStore`] and publishes a level into [`ActiveLevel`] when none is
//!   active - the only two writers of simulation-visible world state, both on
//!   the simulation thread.
//!
//! Concurrency model: lock-free channels, owned data on both sides. The
//! worker never touches a world the simulation can see; the simulation never
//! blocks on the disk.

use std::fs;
use std::sync::Arc;

use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info};

use crate::events::worldio::{WorldIoCmd, WorldIoMessage};
use crate::resources::activelevel::ActiveLevel;
use crate::resources::gameworld::{GameWorld, SLOT_COUNT};
use crate::resources::worldio::WorldIoBridge;
use crate::resources::worldstore::WorldStore;

/// Drain any pending messages from the I/O thread into the ECS
/// [`Messages<WorldIoMessage>`] mailbox.
///
/// Non-blocking; intended to run every frame on the main thread.
pub fn poll_world_io_messages(
    bridge: Res<WorldIoBridge>,
    mut writer: MessageWriter<WorldIoMessage>,
) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`WorldIoMessage`].
///
/// Run after [`poll_world_io_messages`] so messages written this frame become
/// visible to readers in the same frame.
pub fn update_bevy_world_io_messages(mut msgs: ResMut<Messages<WorldIoMessage>>) {
    msgs.update();
}

/// Forward ECS [`WorldIoCmd`] messages to the I/O thread via the bridge.
pub fn forward_world_io_cmds(bridge: Res<WorldIoBridge>, mut reader: MessageReader<WorldIoCmd>) {
    for cmd in reader.read() {
        // Forward a clone to the crossbeam channel; ignore send errors on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`WorldIoCmd`].
pub fn update_bevy_world_io_cmds(mut msgs: ResMut<Messages<WorldIoCmd>>) {
    msgs.update();
}

/// Install world snapshots delivered by the I/O thread.
///
/// Loaded worlds land in their [`WorldStore`] slot. If no level is currently
/// published, the first loaded level of an incoming world becomes the active
/// one, so play can start as soon as the background load delivers.
pub fn apply_world_io_messages(
    mut reader: MessageReader<WorldIoMessage>,
    mut store: ResMut<WorldStore>,
    mut active: ResMut<ActiveLevel>,
) {
    for msg in reader.read() {
        match msg {
            WorldIoMessage::WorldLoaded { world } => {
                if active.level().is_none() {
                    if let Some(level) = world.first_loaded_level() {
                        info!(
                            "Publishing level {} of world {} as the active level",
                            level.id(),
                            world.id()
                        );
                        active.publish(Arc::new(level.clone()));
                    }
                }
                store.add_world(world.clone());
            }
            WorldIoMessage::LoadFinished => debug!("Background world load finished"),
            WorldIoMessage::WorldSaved { id } => debug!("World {} saved", id),
            WorldIoMessage::WorldDeleted { id } => debug!("World {} deleted", id),
        }
    }
}

/// Entry point of the dedicated world-I/O thread.
///
/// Blocks on the command channel and performs all disk access for world and
/// level persistence. Every load builds a fresh [`GameWorld`] from scratch
/// and ships it back as an owned snapshot; saves and deletes operate on data
/// the caller handed over. Exits on [`WorldIoCmd::Shutdown`] or when the
/// command channel closes.
pub fn world_io_thread(rx_cmd: Receiver<WorldIoCmd>, tx_msg: Sender<WorldIoMessage>) {
    debug!("World I/O thread started");
    while let Ok(cmd) = rx_cmd.recv() {
        match cmd {
            WorldIoCmd::LoadWorlds { root } => {
                debug!("Starting a bulk world load from {}", root.display());
                for id in 0..SLOT_COUNT as u8 {
                    let mut world = GameWorld::new(id);
                    world.load(&root);
                    let _ = tx_msg.send(WorldIoMessage::WorldLoaded { world });
                }
                let _ = tx_msg.send(WorldIoMessage::LoadFinished);
            }
            WorldIoCmd::LoadWorld { root, id } => {
                let mut world = GameWorld::new(id);
                world.load(&root);
                let _ = tx_msg.send(WorldIoMessage::WorldLoaded { world });
                let _ = tx_msg.send(WorldIoMessage::LoadFinished);
            }
            WorldIoCmd::SaveWorld { root, world } => {
                world.save(&root);
                let _ = tx_msg.send(WorldIoMessage::WorldSaved { id: world.id() });
            }
            WorldIoCmd::SaveWorlds { root, worlds } => {
                debug!("Starting a bulk world save to {}", root.display());
                for world in worlds {
                    world.save(&root);
                    let _ = tx_msg.send(WorldIoMessage::WorldSaved { id: world.id() });
                }
            }
            WorldIoCmd::DeleteWorld { root, id } => {
                let dir = root.join(format!("world{}", id));
                match fs::remove_dir_all(&dir) {
                    Ok(()) => {
                        let _ = tx_msg.send(WorldIoMessage::WorldDeleted { id });
                    }
                    Err(e) => error!("Failed to delete world directory {}: {}", dir.display(), e),
                }
            }
            WorldIoCmd::Shutdown => break,
        }
    }
    debug!("World I/O thread stopped");
}
