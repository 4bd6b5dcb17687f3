//! Damped kinematic body for the player.
//!
//! The [`RigidBody`] keeps per-axis speed and facing separately: `velocity`
//! holds non-negative magnitudes and `direction` holds the sign of travel on
//! each axis. Input builds speed up by half the friction load per tick and
//! friction takes the full load away once input stops, so the body keeps
//! sliding in its last direction until the speed on that axis runs out.
//!
//! Both axes are integrated identically.

use bevy_ecs::prelude::Component;
use serde::Serialize;

pub const DEFAULT_MASS: f32 = 3.0;
pub const DEFAULT_FRICTION: f32 = 0.001;
pub const DEFAULT_MAX_VELOCITY: f32 = 0.05;

/// Combined directional intent for one tick, the sum of held unit vectors.
///
/// Not normalized: holding two orthogonal directions gives both axes full
/// intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Intent {
    pub x: i32,
    pub y: i32,
}

impl Intent {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Intent {
    type Output = Intent;

    fn add(self, rhs: Intent) -> Intent {
        Intent::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Per-axis speed magnitudes, each in `[0, max_velocity]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

/// Per-axis sign of travel, each in `{-1, 0, 1}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

/// Player body: motion state plus the tuning constants driving it.
///
/// # Fields
/// - `velocity` - Current speed per axis
/// - `direction` - Current sign of travel per axis
/// - `intent` - Intent written by the input controller for this tick
/// - `mass`, `friction_coefficient` - Acceleration is `friction * mass / 2`
///   per tick, deceleration is `friction * mass` per tick
/// - `max_velocity` - Speed cap per axis
#[derive(Component, Clone, Debug, PartialEq)]
pub struct RigidBody {
    pub velocity: Velocity,
    pub direction: Direction,
    pub intent: Intent,
    pub mass: f32,
    pub friction_coefficient: f32,
    pub max_velocity: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::with_physics(DEFAULT_MASS, DEFAULT_FRICTION, DEFAULT_MAX_VELOCITY)
    }
}

impl RigidBody {
    /// Create a body at rest with the given tuning.
    pub fn with_physics(mass: f32, friction_coefficient: f32, max_velocity: f32) -> Self {
        Self {
            velocity: Velocity::default(),
            direction: Direction::default(),
            intent: Intent::default(),
            mass,
            friction_coefficient,
            max_velocity,
        }
    }

    /// Speed gained per tick on an axis with intent.
    pub fn acceleration(&self) -> f32 {
        self.friction_coefficient * self.mass / 2.0
    }

    /// Speed lost per tick on an axis without intent.
    pub fn deceleration(&self) -> f32 {
        self.friction_coefficient * self.mass
    }

    /// Update speed and facing on both axes from the stored intent.
    pub fn apply_intent(&mut self) {
        let (accel, decel, cap) = (self.acceleration(), self.deceleration(), self.max_velocity);
        (self.velocity.dx, self.direction.dx) = integrate_axis(
            self.velocity.dx,
            self.direction.dx,
            self.intent.x,
            accel,
            decel,
            cap,
        );
        (self.velocity.dy, self.direction.dy) = integrate_axis(
            self.velocity.dy,
            self.direction.dy,
            self.intent.y,
            accel,
            decel,
            cap,
        );
    }

    /// Position change for this tick, `velocity * direction` per axis.
    pub fn displacement(&self) -> (f32, f32) {
        (
            self.velocity.dx * self.direction.dx as f32,
            self.velocity.dy * self.direction.dy as f32,
        )
    }
}

fn integrate_axis(
    velocity: f32,
    direction: i32,
    intent: i32,
    accel: f32,
    decel: f32,
    cap: f32,
) -> (f32, i32) {
    if intent != 0 {
        ((velocity + accel).min(cap), intent.signum())
    } else {
        let velocity = (velocity - decel).max(0.0);
        // momentum keeps the old facing until the axis comes to rest
        let direction = if velocity > 0.0 { direction } else { 0 };
        (velocity, direction)
    }
}
