//! Error type shared by the simulation core.
//!
//! Every fallible operation in the crate returns [`SimError`]. Arithmetic on
//! positions and velocities never fails (it is clamped or wrapped), so the
//! variants here only cover construction, grid access, and external inputs.

use std::fmt;

use crate::resources::worldgrid::MAX_GRID_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A world grid was requested with a size outside `1..=MAX_GRID_SIZE`.
    InvalidGridSize(i32),
    /// A cell access fell outside `[0, size)` on either axis.
    OutOfBounds { x: i32, y: i32, size: i32 },
    /// The logical frequency must be positive so the tick interval is finite.
    InvalidFps(u32),
    /// A player tuning value would let velocity leave `[0, max_velocity]`.
    InvalidTuning { name: &'static str, value: f32 },
    /// Configuration file could not be read, parsed, or written.
    Config(String),
    /// Input trace could not be read or parsed.
    Trace(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidGridSize(size) => {
                write!(
                    f,
                    "invalid grid size {size}: must be between 1 and {MAX_GRID_SIZE}"
                )
            }
            SimError::OutOfBounds { x, y, size } => {
                write!(f, "cell ({x}, {y}) is outside a {size}x{size} grid")
            }
            SimError::InvalidFps(fps) => {
                write!(f, "invalid fps {fps}: must be greater than zero")
            }
            SimError::InvalidTuning { name, value } => {
                write!(f, "invalid {name} {value}")
            }
            SimError::Config(msg) => write!(f, "config error: {msg}"),
            SimError::Trace(msg) => write!(f, "trace error: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}
