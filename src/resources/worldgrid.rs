//! World grid resource.
//!
//! A fixed-size square matrix of integer cells. Cells default to `0`;
//! [`BLOCKED_CELL`] marks a blocked cell. Nothing in the motion pipeline reads
//! the cells yet, the grid only provides the logical extent the player wraps
//! around and a surface for external code to annotate.
//!
//! Unlike player positions, cell coordinates never wrap: any access outside
//! `[0, size)` fails with [`SimError::OutOfBounds`].

use bevy_ecs::prelude::Resource;

use crate::error::SimError;

/// Sentinel cell value for a blocked cell.
pub const BLOCKED_CELL: i32 = -1;

/// Largest accepted side length.
pub const MAX_GRID_SIZE: i32 = 4096;

/// Marker used by [`WorldGrid::render`] for blocked cells.
pub const BLOCKED_MARKER: &str = "#";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WorldGrid {
    size: i32,
    cells: Vec<i32>,
}

impl WorldGrid {
    /// Create a `size` x `size` grid of zeroed cells.
    ///
    /// Fails for sizes outside `1..=MAX_GRID_SIZE`.
    pub fn new(size: i32) -> Result<Self, SimError> {
        if !(1..=MAX_GRID_SIZE).contains(&size) {
            return Err(SimError::InvalidGridSize(size));
        }
        let side = size as usize;
        let len = side
            .checked_mul(side)
            .ok_or(SimError::InvalidGridSize(size))?;
        Ok(Self {
            size,
            cells: vec![0; len],
        })
    }

    /// Number of cells along one side.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Logical extent used by the player wraparound.
    pub fn extent(&self) -> f32 {
        self.size as f32
    }

    pub fn get(&self, x: i32, y: i32) -> Result<i32, SimError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, value: i32) -> Result<(), SimError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Whether the cell holds the [`BLOCKED_CELL`] sentinel.
    pub fn is_blocked(&self, x: i32, y: i32) -> Result<bool, SimError> {
        Ok(self.get(x, y)? == BLOCKED_CELL)
    }

    /// One string per row, cells separated by a single space.
    ///
    /// Blocked cells are printed as [`BLOCKED_MARKER`].
    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks(self.size as usize)
            .map(|row| {
                row.iter()
                    .map(|&cell| {
                        if cell == BLOCKED_CELL {
                            BLOCKED_MARKER.to_string()
                        } else {
                            cell.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, SimError> {
        if x < 0 || y < 0 || x >= self.size || y >= self.size {
            return Err(SimError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y as usize * self.size as usize + x as usize)
    }
}
