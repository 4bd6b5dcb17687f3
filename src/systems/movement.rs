//! Friction integration and wraparound.
//!
//! One call advances a body by exactly one logical tick: speed and facing
//! are updated from the intent, the position moves by `velocity * direction`
//! and then wraps around the grid extent.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldgrid::WorldGrid;

/// Advance one body by one tick against an explicit `extent`.
pub fn step_body(position: &mut MapPosition, rigidbody: &mut RigidBody, extent: f32) {
    rigidbody.apply_intent();
    let (dx, dy) = rigidbody.displacement();
    position.x += dx;
    position.y += dy;
    position.wrap(extent);
}

/// Step every body using the current grid's extent.
///
/// Does nothing before a grid exists.
pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
    grid: Option<Res<WorldGrid>>,
) {
    let Some(grid) = grid else {
        return;
    };
    let extent = grid.extent();
    for (mut position, mut rigidbody) in query.iter_mut() {
        step_body(&mut position, &mut rigidbody, extent);
        trace!(
            "body at ({:.4}, {:.4}) v=({:.4}, {:.4}) dir=({}, {})",
            position.x,
            position.y,
            rigidbody.velocity.dx,
            rigidbody.velocity.dy,
            rigidbody.direction.dx,
            rigidbody.direction.dy
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::rigidbody::{Direction, Intent, Velocity};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_step_moves_after_updating_velocity() {
        let mut pos = MapPosition::new(1.0, 1.0);
        let mut rb = RigidBody::default();
        rb.intent = Intent::new(1, 1);
        step_body(&mut pos, &mut rb, 8.0);
        assert!(approx_eq(pos.x, 1.0015));
        assert!(approx_eq(pos.y, 1.0015));
    }

    #[test]
    fn test_axes_are_symmetric() {
        let mut pos_x = MapPosition::new(4.0, 4.0);
        let mut pos_y = MapPosition::new(4.0, 4.0);
        let mut rb_x = RigidBody::default();
        let mut rb_y = RigidBody::default();
        rb_x.intent = Intent::new(1, 0);
        rb_y.intent = Intent::new(0, 1);
        for _ in 0..40 {
            step_body(&mut pos_x, &mut rb_x, 8.0);
            step_body(&mut pos_y, &mut rb_y, 8.0);
        }
        assert!(approx_eq(pos_x.x - 4.0, pos_y.y - 4.0));
        assert!(approx_eq(rb_x.velocity.dx, rb_y.velocity.dy));
    }

    #[test]
    fn test_step_wraps_past_extent() {
        let mut pos = MapPosition::new(7.99, 0.5);
        let mut rb = RigidBody::default();
        rb.velocity = Velocity { dx: 0.05, dy: 0.0 };
        rb.direction = Direction { dx: 1, dy: 0 };
        rb.intent = Intent::new(1, 0);
        step_body(&mut pos, &mut rb, 8.0);
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn test_step_wraps_below_zero() {
        let mut pos = MapPosition::new(0.0, 0.0);
        let mut rb = RigidBody::default();
        rb.intent = Intent::new(0, -1);
        step_body(&mut pos, &mut rb, 8.0);
        assert_eq!(pos.y, 8.0);
        assert_eq!(pos.x, 0.0);
    }
}
