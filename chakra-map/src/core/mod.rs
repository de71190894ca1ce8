//! Core types for the rolling grid map.
//!
//! ## Coordinate Convention
//!
//! - **World**: floating-point `(x, y)`, one unit per cell
//! - **Logical**: integer `(row, col)` relative to the window center;
//!   rows follow world Y, columns follow world X
//! - **Physical**: `(row, col)` index into a layer's fixed storage
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`WorldPoint`]: world position of the window center or a query
//! - [`LogicalCoord`]: unbounded cell address used by layers
//! - [`PhysicalCoord`]: wrapped storage address
//!
//! ### Cells
//! - [`CellValue`]: the `Copy + Default` contract for layer contents
//! - [`CellRounding`]: world-to-cell conversion mode
//! - [`CellType`]: semantic navigation cell

mod cell;
mod point;

pub use cell::{CellRounding, CellType, CellValue};
pub use point::{LogicalCoord, PhysicalCoord, WorldPoint};

pub(crate) use point::wrap_index;
