//! Clock advancement.
//!
//! Feeds the injected frame time into the
//! [`SimulationClock`](crate::resources::simclock::SimulationClock) resource.
use bevy_ecs::prelude::*;

use crate::resources::simclock::SimulationClock;

/// Ask the clock whether a logical step is due at `now_ms`.
///
/// Returns `false` when no clock resource has been inserted.
pub fn advance_clock(world: &mut World, now_ms: f64) -> bool {
    world
        .get_resource_mut::<SimulationClock>()
        .is_some_and(|mut clock| clock.tick(now_ms))
}
