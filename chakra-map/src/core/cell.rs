//! Cell value contract and world-to-cell conversion.

use serde::{Deserialize, Serialize};

/// Anything that can live in a grid layer.
///
/// Cells are copied in and out of storage and `Default` supplies the
/// empty value for unknown layers and freshly created views.
pub trait CellValue: Copy + Default {}

impl<T: Copy + Default> CellValue for T {}

/// How a relative world coordinate is turned into an integer cell.
///
/// The two modes differ only for negative, non-integer inputs:
/// `-0.5` truncates to `0` but floors to `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRounding {
    /// Round toward zero. Cell 0 spans `(-1, 1)`.
    #[default]
    Truncate,
    /// Round toward negative infinity. Every cell spans one unit.
    Floor,
}

impl CellRounding {
    /// Convert a relative world coordinate to a cell index.
    ///
    /// Values outside the i32 range saturate.
    #[inline]
    pub fn to_cell(self, value: f64) -> i32 {
        match self {
            CellRounding::Truncate => value.trunc() as i32,
            CellRounding::Floor => value.floor() as i32,
        }
    }
}

/// Semantic cell type for navigation layers.
///
/// - `Unknown` - Not yet observed (the fill value of a fresh window)
/// - `Floor` - Traversable surface
/// - `Wall` - Lidar-detected obstacle
/// - `Cliff` - Floor drop-off
/// - `Bump` - Invisible obstacle found by the bumper
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellType {
    /// Cell has not been observed since it entered the window
    #[default]
    Unknown = 0,
    /// Traversable floor surface
    Floor = 1,
    /// Solid wall or obstacle detected by lidar
    Wall = 2,
    /// Floor drop-off detected by cliff sensors
    Cliff = 3,
    /// Invisible obstacle detected by bumper collision
    Bump = 4,
}

impl CellType {
    /// Can the robot traverse this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(self, CellType::Floor)
    }

    /// Is this cell an obstacle (any type)?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, CellType::Wall | CellType::Cliff | CellType::Bump)
    }

    /// Has this cell been observed?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellType::Unknown
    }
}
