//! High-level game setup.
//!
//! Wires the ECS world for play: inserts the engine resources, spawns the
//! world-I/O thread, registers observers, spawns the player, and builds the
//! per-frame schedule. The windowing/render front-end drives the result by
//! writing [`InputState`](crate::resources::input::InputState), calling
//! [`update_world_time`](crate::systems::time::update_world_time) and running
//! the schedule once per frame.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::health::Health;
use crate::components::inputcontrolled::InputControlled;
use crate::components::kinematicbody::KinematicBody;
use crate::components::mapposition::MapPosition;
use crate::events::collision::observe_contact_damage;
use crate::events::worldio::WorldIoCmd;
use crate::resources::activelevel::ActiveLevel;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::level::TILE_SIZE;
use crate::resources::worldio::{WorldIoBridge, setup_world_io};
use crate::resources::worldstore::WorldStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::collision_detector;
use crate::systems::inputcontroller::platform_input_controller;
use crate::systems::movement::movement;
use crate::systems::worldio::{
    apply_world_io_messages, forward_world_io_cmds, poll_world_io_messages,
    update_bevy_world_io_cmds, update_bevy_world_io_messages,
};

/// Pixel size of the player's collision box.
const PLAYER_SIZE: f32 = 28.0;
/// Player spawn point, in tiles.
const PLAYER_SPAWN_TILE: (f32, f32) = (2.0, 2.0);
const PLAYER_MAX_HEALTH: i32 = 100;

/// Insert the engine resources, start the world-I/O thread, register
/// observers and spawn the player.
pub fn setup(world: &mut World, config: &GameConfig) {
    world.insert_resource(config.clone());
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WorldStore::new());
    world.insert_resource(ActiveLevel::new());
    setup_world_io(world);

    world.spawn(Observer::new(observe_contact_damage));

    spawn_player(world, config);
}

/// Spawn the player entity: a kinematic body with input control and health.
pub fn spawn_player(world: &mut World, config: &GameConfig) {
    world.spawn((
        MapPosition::new(
            PLAYER_SPAWN_TILE.0 * TILE_SIZE,
            PLAYER_SPAWN_TILE.1 * TILE_SIZE,
        ),
        KinematicBody::new(PLAYER_SIZE, PLAYER_SIZE)
            .with_gravity_rates(config.gravity_rise, config.gravity_fall),
        InputControlled::new(config.walk_speed, config.jump_impulse),
        Health::new(PLAYER_MAX_HEALTH),
    ));
    info!("Player spawned");
}

/// Ask the world-I/O thread to load every world slot from the configured
/// worlds root.
pub fn request_load_all_worlds(world: &mut World) {
    let root = world.resource::<GameConfig>().worlds_root.clone();
    let bridge = world.resource::<WorldIoBridge>();
    let _ = bridge.tx_cmd.send(WorldIoCmd::LoadWorlds { root });
}

/// Ask the world-I/O thread to save a snapshot of every loaded world.
pub fn request_save_all_worlds(world: &mut World) {
    let root = world.resource::<GameConfig>().worlds_root.clone();
    let worlds: Vec<_> = world
        .resource::<WorldStore>()
        .worlds()
        .iter()
        .flatten()
        .cloned()
        .collect();
    if worlds.is_empty() {
        info!("Skipping world save - there are no loaded worlds");
        return;
    }
    let bridge = world.resource::<WorldIoBridge>();
    let _ = bridge.tx_cmd.send(WorldIoCmd::SaveWorlds { root, worlds });
}

/// Build the per-frame schedule.
///
/// The chain order is part of the engine contract: input is applied before
/// movement, movement (gravity, then horizontal, then vertical resolution)
/// completes before overlap detection, and world-I/O messages are installed
/// at a single point at the end of the frame.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            platform_input_controller,
            movement,
            collision_detector,
            poll_world_io_messages,
            update_bevy_world_io_messages,
            forward_world_io_cmds,
            update_bevy_world_io_cmds,
            apply_world_io_messages,
        )
            .chain(),
    );
    schedule
}
