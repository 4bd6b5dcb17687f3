//! Input-to-intent controller.
//!
//! Reads the shared [`InputSignals`](crate::resources::signals::InputSignals)
//! and writes the combined directional intent into each controlled entity's
//! [`RigidBody`](crate::components::rigidbody::RigidBody). Must run before
//! [`movement`](crate::systems::movement::movement) in the step schedule.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::signals::InputSignals;

/// Overwrite each controlled body's intent with this tick's held directions.
pub fn input_controller(
    mut query: Query<(&InputControlled, &mut RigidBody)>,
    signals: Res<InputSignals>,
) {
    for (controlled, mut rigidbody) in query.iter_mut() {
        rigidbody.intent = controlled.intent(&signals);
    }
}
