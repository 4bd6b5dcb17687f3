//! ECS components for the player entity.
//!
//! Submodules overview:
//! - [`inputcontrolled`] – directional signal table producing movement intent
//! - [`mapposition`] – continuous position on the world grid with wraparound
//! - [`player`] – marker for the player-controlled entity
//! - [`rigidbody`] – damped body: speed, facing, intent, and tuning constants

pub mod inputcontrolled;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
