//! Coordinate types for the rolling grid.
//!
//! Three coordinate spaces are in play:
//!
//! - [`WorldPoint`]: floating-point world position (one unit per cell)
//! - [`LogicalCoord`]: unbounded integer cell relative to the window center
//! - [`PhysicalCoord`]: fixed-range index into a layer's storage

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Logical cell coordinates (unbounded, (0,0) is the current window center)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LogicalCoord {
    /// Row (follows world Y)
    pub row: i32,
    /// Column (follows world X)
    pub col: i32,
}

impl LogicalCoord {
    /// Logical origin
    pub const ORIGIN: LogicalCoord = LogicalCoord { row: 0, col: 0 };

    /// Create a new logical coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Component-wise difference, wrapping on i32 overflow.
impl Sub for LogicalCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        LogicalCoord::new(
            self.row.wrapping_sub(other.row),
            self.col.wrapping_sub(other.col),
        )
    }
}

/// Physical storage coordinates, always inside `[0, height) x [0, width)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PhysicalCoord {
    /// Storage row
    pub row: usize,
    /// Storage column
    pub col: usize,
}

impl PhysicalCoord {
    /// Create a new physical coordinate
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// World coordinates (f64, one unit per cell)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };
}

/// Wrap `value` into `[0, dim)`.
///
/// `dim` must be non-zero. Works in i64 so `logical + offset` cannot overflow.
#[inline]
pub(crate) fn wrap_index(value: i64, dim: usize) -> usize {
    value.rem_euclid(dim as i64) as usize
}
