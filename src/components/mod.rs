//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Entity kinds are built by composition: the player is a
//! kinematic body plus input control and health; a hazard is a body plus
//! contact damage; a future NPC picks whatever subset it needs.
//!
//! Submodules overview:
//! - [`contactdamage`] – damage dealt to other entities on contact
//! - [`health`] – current/maximum health with damage and heal operations
//! - [`inputcontrolled`] – movement tunables for input-steered entities
//! - [`kinematicbody`] – velocity, collision box, and movement flags
//! - [`mapposition`] – world-space position (pivot) for an entity

pub mod contactdamage;
pub mod health;
pub mod inputcontrolled;
pub mod kinematicbody;
pub mod mapposition;
