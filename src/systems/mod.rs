//! Engine systems.
//!
//! Submodules overview
//! - [`inputcontroller`] – turn held signals into a per-tick intent on bodies
//! - [`movement`] – friction integration, position update, and wraparound
//! - [`status`] – read-only status line projection for debug displays
//! - [`time`] – feed injected frame time into the simulation clock

pub mod inputcontroller;
pub mod movement;
pub mod status;
pub mod time;
