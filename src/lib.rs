//! gridpulse library.
//!
//! Deterministic core of a single-player 2D grid game: a fixed-timestep
//! clock, a set of held input signals, a damped player body that wraps around
//! a square world grid, and the [`engine::Engine`] tying them together.
//! Rendering and raw input capture live outside this crate.

pub mod components;
pub mod engine;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;
pub mod trace;
