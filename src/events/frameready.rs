//! Render notification.
//!
//! The engine triggers a [`FrameReadyEvent`] right after every logical step,
//! including the one forced by a pause toggle. External renderers register
//! an observer for it and read the player, grid and status from the world.
//! The core never calls into rendering code beyond this event.
use bevy_ecs::prelude::*;

/// Event fired once per completed logical step.
#[derive(Event, Debug, Clone, Copy)]
pub struct FrameReadyEvent {}
