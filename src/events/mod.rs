//! Event types and observers used by the engine.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`collision`] – contact notifications emitted by the collision system
//! - [`worldio`] – commands and messages for the background world-I/O thread

pub mod collision;
pub mod worldio;
