//! Input-controlled movement component.
//!
//! [`InputControlled`] maps held signal names to unit vectors. The
//! [`input_controller`](crate::systems::inputcontroller::input_controller)
//! system sums the vectors of every held signal into the entity's
//! [`Intent`] each tick.

use bevy_ecs::prelude::Component;

use crate::components::rigidbody::Intent;
use crate::resources::signals::InputSignals;

/// Directional lookup table shared by every controlled entity.
pub const DIRECTION_BINDINGS: [(&str, Intent); 4] = [
    ("Up", Intent { x: 0, y: -1 }),
    ("Down", Intent { x: 0, y: 1 }),
    ("Left", Intent { x: -1, y: 0 }),
    ("Right", Intent { x: 1, y: 0 }),
];

/// Movement intent derived from held directional signals.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Signal name and the unit vector it contributes while held.
    pub bindings: [(&'static str, Intent); 4],
}

impl Default for InputControlled {
    fn default() -> Self {
        Self {
            bindings: DIRECTION_BINDINGS,
        }
    }
}

impl InputControlled {
    /// Sum the unit vectors of all held directional signals.
    ///
    /// Opposite signals cancel out. Signals outside the table are ignored.
    pub fn intent(&self, signals: &InputSignals) -> Intent {
        self.bindings
            .iter()
            .filter(|(name, _)| signals.is_active(name))
            .fold(Intent::default(), |acc, (_, unit)| acc + *unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(names: &[&str]) -> InputSignals {
        let mut signals = InputSignals::default();
        for name in names {
            signals.set_signal(*name, true);
        }
        signals
    }

    #[test]
    fn test_no_signals_no_intent() {
        let ctrl = InputControlled::default();
        assert_eq!(ctrl.intent(&InputSignals::default()), Intent::new(0, 0));
    }

    #[test]
    fn test_single_direction() {
        let ctrl = InputControlled::default();
        assert_eq!(ctrl.intent(&held(&["Up"])), Intent::new(0, -1));
        assert_eq!(ctrl.intent(&held(&["Right"])), Intent::new(1, 0));
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let ctrl = InputControlled::default();
        assert_eq!(ctrl.intent(&held(&["Down", "Left"])), Intent::new(-1, 1));
    }

    #[test]
    fn test_opposites_cancel() {
        let ctrl = InputControlled::default();
        assert_eq!(ctrl.intent(&held(&["Left", "Right"])), Intent::new(0, 0));
        assert_eq!(
            ctrl.intent(&held(&["Left", "Right", "Up"])),
            Intent::new(0, -1)
        );
    }

    #[test]
    fn test_released_and_unknown_signals_ignored() {
        let ctrl = InputControlled::default();
        let mut signals = held(&["Jump", "Right"]);
        signals.set_signal("Right", false);
        assert_eq!(ctrl.intent(&signals), Intent::new(0, 0));
    }
}
