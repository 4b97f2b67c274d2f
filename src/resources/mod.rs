//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution, together with the plain domain types
//! they hold (tile materials, level grids, worlds). Each submodule documents
//! the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `activelevel` – handle to the level the simulation currently runs against
//! - `gameconfig` – worlds root and movement tunables from config.ini
//! - `gameworld` – a world: up to five levels under one directory
//! - `input` – per-frame movement intent written by the windowing front-end
//! - `level` – the 64×32 tile grid and its data file format
//! - `objecttype` – tile material registry (passability + persistence codes)
//! - `worldio` – bridge and channels for the background world-I/O thread
//! - `worldstore` – the up-to-five currently loaded worlds
//! - `worldtime` – simulation time and delta
pub mod activelevel;
pub mod gameconfig;
pub mod gameworld;
pub mod input;
pub mod level;
pub mod objecttype;
pub mod worldio;
pub mod worldstore;
pub mod worldtime;
