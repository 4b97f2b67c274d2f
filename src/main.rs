//! Gridhopper main entry point.
//!
//! A 2D tile-grid platformer engine written in Rust using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **crossbeam-channel** for the background world-I/O thread
//! - **configparser** for INI configuration
//!
//! This executable runs the engine headless at a fixed timestep: it requests
//! a background load of every world, simulates the player body against the
//! first level that arrives, and saves the loaded worlds back on exit. The
//! windowing, rendering and device-input layers are separate front-ends that
//! drive the same library surface.
//!
//! # Main Loop
//!
//! 1. Parse CLI arguments and load `config.ini`
//! 2. Build the ECS world, resources, world-I/O thread and player
//! 3. Request a background load of all world slots
//! 4. Tick: update time, run the frame schedule, pace to the tick rate
//! 5. Request a save of the loaded worlds and join the I/O thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 600
//! ```

mod components;
mod events;
mod game;
mod resources;
mod systems;

use std::path::PathBuf;
use std::time::Duration;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::info;

use crate::resources::gameconfig::GameConfig;
use crate::resources::worldio::shutdown_world_io;
use crate::systems::time::update_world_time;

/// Simulation tick rate of the headless loop.
const TICK_RATE: f32 = 60.0;

/// Gridhopper 2D platformer engine
#[derive(Parser)]
#[command(version, about = "Tile-grid platformer engine, headless runner")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the worlds root directory from the configuration.
    #[arg(long, value_name = "PATH")]
    worlds_root: Option<PathBuf>,

    /// Number of simulation ticks to run before saving and exiting.
    #[arg(long, default_value_t = 600)]
    ticks: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        info!("Using default configuration: {}", e);
    }
    if let Some(root) = cli.worlds_root {
        config.worlds_root = root;
    }

    let mut world = World::new();
    game::setup(&mut world, &config);
    game::request_load_all_worlds(&mut world);

    let mut schedule = game::build_schedule();
    let dt = 1.0 / TICK_RATE;
    info!("Simulating {} ticks at {} Hz", cli.ticks, TICK_RATE);
    for _ in 0..cli.ticks {
        update_world_time(&mut world, dt);
        schedule.run(&mut world);
        std::thread::sleep(Duration::from_secs_f32(dt));
    }

    game::request_save_all_worlds(&mut world);
    shutdown_world_io(&mut world);
    info!("Done");
}
