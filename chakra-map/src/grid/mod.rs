//! Toroidal grid layers.
//!
//! A layer keeps a fixed physical buffer and scrolls by rotating the logical
//! origin over it. Data never moves in memory; only the band of rows/columns
//! that changes meaning on a move is rewritten.
//!
//! ## Architecture
//!
//! ```text
//!        move_logical_origin(d_row, d_col)
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────┐
//! │             ToroidalLayer               │
//! │  offset ──► logical ↔ physical mapping  │
//! │  SweptBand ──► fill_row / fill_col      │
//! └────────────────────┬────────────────────┘
//!                      ▼
//!          ┌───────────────────────┐
//!          │     GridStorage<T>    │
//!          │  (row-major, fixed)   │
//!          └───────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`ToroidalLayer`]: Wrap-around addressing, shifting, views, reset
//! - [`LayerMut`]: Cell edits on a map-owned layer without shifting it
//! - [`GridStorage`]: Dense fixed-size storage, also used for views
//! - [`SweptBand`] / [`SweepAnchor`]: Which rows/columns a shift reinitializes
//! - [`MapConfig`]: Window size, layer names, rounding and anchor options
//!
//! ## Example
//!
//! ```rust
//! use chakra_map::core::LogicalCoord;
//! use chakra_map::grid::ToroidalLayer;
//!
//! let mut layer = ToroidalLayer::new(10, 10, 0.0f32).unwrap();
//! layer.set(LogicalCoord::new(4, 4), 1.0);
//!
//! // Scroll two rows forward: no data is copied
//! let summary = layer.move_logical_origin(2, 0);
//! assert_eq!(summary.rows_cleared, 2);
//! assert_eq!(layer.get(LogicalCoord::new(2, 4)), 1.0);
//! ```

mod config;
mod layer;
mod storage;
mod sweep;

pub use config::{ConfigError, DEFAULT_LAYER, MapConfig};
pub use layer::{LayerMut, ToroidalLayer};
pub use storage::GridStorage;
pub use sweep::{SweepAnchor, SweepSummary, SweptBand};
