//! ECS resources that bridge the main thread with the world-I/O thread.
//!
//! Use [`setup_world_io`] once during initialization to spawn the worker
//! thread and insert the [`WorldIoBridge`] and message resources. Call
//! [`shutdown_world_io`] during teardown to stop the thread and join it.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::worldio::{WorldIoCmd, WorldIoMessage};
use crate::systems::worldio::world_io_thread;

/// Shared bridge between the ECS world and the world-I/O thread.
///
/// Created by [`setup_world_io`]. Systems send commands via
/// [`WorldIoBridge::tx_cmd`] and poll results via [`WorldIoBridge::rx_msg`].
#[derive(Resource)]
pub struct WorldIoBridge {
    /// Sender for [`WorldIoCmd`] messages (ECS -> I/O thread).
    pub tx_cmd: Sender<WorldIoCmd>,
    /// Receiver for [`WorldIoMessage`] messages (I/O thread -> ECS).
    pub rx_msg: Receiver<WorldIoMessage>,
    /// Join handle for the background I/O thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the world-I/O thread and register bridge resources.
///
/// This function:
/// - Creates command/message channels.
/// - Spawns the background thread running [`world_io_thread`].
/// - Inserts [`WorldIoBridge`] and initializes the `Messages` mailboxes so
///   systems can send commands and poll for results.
pub fn setup_world_io(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<WorldIoCmd>();
    let (tx_msg, rx_msg) = unbounded::<WorldIoMessage>();

    let handle = std::thread::spawn(move || world_io_thread(rx_cmd, tx_msg));

    world.insert_resource(WorldIoBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(Messages::<WorldIoMessage>::default());
    world.insert_resource(Messages::<WorldIoCmd>::default());
}

/// Gracefully request shutdown of the world-I/O thread and join it.
///
/// If the bridge resource exists, sends [`WorldIoCmd::Shutdown`], waits for
/// the thread to exit, and removes the resource from the world.
pub fn shutdown_world_io(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<WorldIoBridge>() {
        let _ = bridge.tx_cmd.send(WorldIoCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
