//! Continuous position on the world grid.

use bevy_ecs::prelude::Component;
use serde::Serialize;

/// Player position in grid units. `(0, 0)` is the top-left corner.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Toroidal wrap against `extent` on both axes.
    ///
    /// A coordinate past `extent` reappears at `0`, one below `0` reappears
    /// at `extent`. Coordinates are never clamped.
    pub fn wrap(&mut self, extent: f32) {
        self.x = wrap_axis(self.x, extent);
        self.y = wrap_axis(self.y, extent);
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value > extent {
        0.0
    } else if value < 0.0 {
        extent
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_overflow_goes_to_zero() {
        let mut pos = MapPosition::new(8.01, 3.0);
        pos.wrap(8.0);
        assert_eq!(pos, MapPosition::new(0.0, 3.0));
    }

    #[test]
    fn test_wrap_underflow_goes_to_extent() {
        let mut pos = MapPosition::new(2.0, -0.02);
        pos.wrap(8.0);
        assert_eq!(pos, MapPosition::new(2.0, 8.0));
    }

    #[test]
    fn test_wrap_keeps_inside_values() {
        let mut pos = MapPosition::new(0.0, 8.0);
        pos.wrap(8.0);
        assert_eq!(pos, MapPosition::new(0.0, 8.0));
    }
}
