//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation, plus the
//! world-I/O worker thread they bridge to.
//!
//! Submodules overview
//! - [`collision`] – entity-overlap checks and collision event emission
//! - [`inputcontroller`] – translate input state into velocity on entities
//! - [`movement`] – gravity, tile collision resolution, position integration
//! - [`tilecollision`] – the axis-separated tile collision resolver
//! - [`time`] – update simulation time and delta
//! - [`worldio`] – world-I/O thread and its bridge systems

pub mod collision;
pub mod inputcontroller;
pub mod movement;
pub mod tilecollision;
pub mod time;
pub mod worldio;
