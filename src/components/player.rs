//! Player marker component.

use bevy_ecs::prelude::Component;

/// Tag for the single player-controlled entity.
///
/// The engine despawns every entity carrying this tag on restart.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
