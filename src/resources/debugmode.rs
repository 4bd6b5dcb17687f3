//! Debug toggle resource.
//!
//! While this resource is present, external code is expected to show the
//! engine's status line and the driver logs every step. Its presence is
//! independent of the clock's run state.

use bevy_ecs::prelude::Resource;

/// Marker resource: present while debug output is enabled.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DebugMode;
