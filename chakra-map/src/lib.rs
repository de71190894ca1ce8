//! # ChakraMap
//!
//! Rolling, robot-centered multi-layer grid map.
//!
//! ## Overview
//!
//! A mobile robot keeps a fixed-size window of the world around itself
//! (occupancy, cost, navigation layers). When the robot moves, the window
//! moves with it, and moving it never copies or shifts cell data:
//!
//! - Every layer is a [`ToroidalLayer`]: a fixed buffer addressed modulo its
//!   size, with a rotating logical origin
//! - A move only rewrites the rows/columns that scrolled out, so it costs
//!   O(perimeter swept), not O(area)
//! - All layers share one floating-point world center and move together
//!
//! ## Quick Start
//!
//! ```rust
//! use chakra_map::{LayeredGridMap, DEFAULT_LAYER};
//!
//! let mut map = LayeredGridMap::new(10, 10, 0.0f32).unwrap();
//! map.add_layer("obstacle");
//!
//! map.set_cell_value(0.0, 0.0, 1.0, DEFAULT_LAYER).unwrap();
//! map.set_cell_value(2.0, 2.0, 100.0, "obstacle").unwrap();
//! assert_eq!(map.get_cell_value(2.0, 2.0, "obstacle").unwrap(), 100.0);
//!
//! map.move_center(3, 2);
//! assert_eq!(map.world_center_x(), 3.0);
//! assert_eq!(map.world_center_y(), 2.0);
//! ```
//!
//! ## Coordinate System
//!
//! - World `(x, y)` is continuous, one unit per cell
//! - Logical `(row, col)` is relative to the world center:
//!   `row = cell(y - center_y)`, `col = cell(x - center_x)`
//! - A move by `(dx, dy)` shifts every layer by `d_row = dy`, `d_col = dx`,
//!   so rows always follow Y and columns always follow X
//!
//! ## Concurrency
//!
//! The map is single-threaded. Every mutating method takes `&mut self`, so a
//! move can never be observed half-applied; share a map across threads by
//! wrapping it in one lock.

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid layers and storage
pub mod grid;

// Configuration file loading
pub mod config;

// Error types
pub mod error;

use std::collections::HashMap;

// Re-export commonly used types
pub use core::{CellRounding, CellType, CellValue, LogicalCoord, PhysicalCoord, WorldPoint};

pub use grid::{
    ConfigError, DEFAULT_LAYER, GridStorage, LayerMut, MapConfig, SweepAnchor, SweepSummary,
    SweptBand, ToroidalLayer,
};

pub use config::{ChakraConfig, ConfigLoadError};

pub use error::{MapError, Result};

/// Result of moving the map center
#[derive(Clone, Debug, Default)]
pub struct MoveResult {
    /// Logical row shift applied to every layer
    pub d_row: i32,
    /// Logical column shift applied to every layer
    pub d_col: i32,
    /// Number of layers shifted
    pub layers_shifted: usize,
    /// Per-layer sweep (identical for every layer)
    pub sweep: SweepSummary,
}

/// Multi-layer rolling grid map
///
/// Owns a set of named [`ToroidalLayer`]s of identical size that share one
/// world center. This is the primary type for interacting with the map.
#[derive(Clone, Debug)]
pub struct LayeredGridMap<T> {
    width: usize,
    height: usize,
    /// World position represented by logical (0, 0)
    world_center: WorldPoint,
    layers: HashMap<String, ToroidalLayer<T>>,
    /// Fill value for layers created by `add_layer`
    default_fill_value: T,
    cell_rounding: CellRounding,
    sweep_anchor: SweepAnchor,
}

impl<T: CellValue> LayeredGridMap<T> {
    /// Create a `width x height` map with a [`DEFAULT_LAYER`] filled with
    /// `initial_value`.
    pub fn new(width: usize, height: usize, initial_value: T) -> Result<Self> {
        Self::from_config(&MapConfig::new(width, height), initial_value)
    }

    /// Create a map from a configuration.
    ///
    /// Creates [`DEFAULT_LAYER`] plus every configured layer, all filled with
    /// `initial_value`.
    pub fn from_config(config: &MapConfig, initial_value: T) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(MapError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        config.validate()?;

        let mut map = Self {
            width: config.width,
            height: config.height,
            world_center: WorldPoint::ZERO,
            layers: HashMap::new(),
            default_fill_value: initial_value,
            cell_rounding: config.cell_rounding,
            sweep_anchor: config.sweep_anchor,
        };

        map.add_layer(DEFAULT_LAYER);
        for name in &config.layers {
            map.add_layer(name.as_str());
        }

        log::debug!(
            "Created {}x{} grid map with {} layer(s), anchor {:?}",
            map.width,
            map.height,
            map.layers.len(),
            map.sweep_anchor
        );
        Ok(map)
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    /// Window width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Window height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// World position of logical (0, 0).
    #[inline]
    pub fn world_center(&self) -> WorldPoint {
        self.world_center
    }

    /// World X of the window center.
    #[inline]
    pub fn world_center_x(&self) -> f64 {
        self.world_center.x
    }

    /// World Y of the window center.
    #[inline]
    pub fn world_center_y(&self) -> f64 {
        self.world_center.y
    }

    /// Fill value given to newly added layers.
    #[inline]
    pub fn default_fill_value(&self) -> T {
        self.default_fill_value
    }

    /// World-to-cell conversion mode.
    #[inline]
    pub fn cell_rounding(&self) -> CellRounding {
        self.cell_rounding
    }

    /// Sweep anchor shared by every layer.
    #[inline]
    pub fn sweep_anchor(&self) -> SweepAnchor {
        self.sweep_anchor
    }

    // =========================================================================
    // LAYER MANAGEMENT
    // =========================================================================

    /// Add a layer filled with the default fill value.
    ///
    /// Returns false, changing nothing, if the name is blank or a layer with
    /// this name already exists. Blank names are rejected the same way
    /// [`MapConfig::validate`] rejects them.
    pub fn add_layer(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() {
            log::warn!("Ignoring layer with blank name {:?}", name);
            return false;
        }
        if self.layers.contains_key(&name) {
            return false;
        }

        let layer = ToroidalLayer::filled(
            self.width,
            self.height,
            self.default_fill_value,
            self.sweep_anchor,
        );

        log::debug!("Added layer '{}'", name);
        self.layers.insert(name, layer);
        true
    }

    /// Remove a layer, returning it if it existed.
    pub fn remove_layer(&mut self, name: &str) -> Option<ToroidalLayer<T>> {
        let removed = self.layers.remove(name);
        if removed.is_some() {
            log::debug!("Removed layer '{}'", name);
        }
        removed
    }

    /// Is there a layer with this name?
    #[inline]
    pub fn has_layer(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// Number of layers.
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layer names in sorted order.
    pub fn layer_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Borrow a layer.
    pub fn layer(&self, name: &str) -> Result<&ToroidalLayer<T>> {
        self.layers
            .get(name)
            .ok_or_else(|| MapError::UnknownLayer(name.to_string()))
    }

    /// Mutably borrow a layer's cells.
    ///
    /// The handle can write and reset cells but not shift the layer; use
    /// [`move_center`](Self::move_center) to move every layer together.
    pub fn layer_mut(&mut self, name: &str) -> Result<LayerMut<'_, T>> {
        self.layers
            .get_mut(name)
            .map(LayerMut::new)
            .ok_or_else(|| MapError::UnknownLayer(name.to_string()))
    }

    // =========================================================================
    // WINDOW MOTION
    // =========================================================================

    /// Move the window center by `(dx, dy)` cells.
    ///
    /// Every layer is shifted by `d_row = dy`, `d_col = dx` and has its swept
    /// band reset to its fill value.
    pub fn move_center(&mut self, dx: i32, dy: i32) -> MoveResult {
        self.world_center.x += dx as f64;
        self.world_center.y += dy as f64;

        let d_row = dy;
        let d_col = dx;

        let mut result = MoveResult {
            d_row,
            d_col,
            ..Default::default()
        };
        for layer in self.layers.values_mut() {
            result.sweep = layer.move_logical_origin(d_row, d_col);
            result.layers_shifted += 1;
        }

        if result.sweep.rows_saturated || result.sweep.cols_saturated {
            log::debug!(
                "Move ({}, {}) swept a full axis of the {}x{} window",
                dx,
                dy,
                self.width,
                self.height
            );
        }
        log::trace!(
            "Center now ({:.3}, {:.3}), {} layer(s) shifted",
            self.world_center.x,
            self.world_center.y,
            result.layers_shifted
        );

        result
    }

    // =========================================================================
    // POINT ACCESS
    // =========================================================================

    /// Convert a world position to a logical coordinate.
    #[inline]
    pub fn world_to_logical(&self, x: f64, y: f64) -> LogicalCoord {
        LogicalCoord::new(
            self.cell_rounding.to_cell(y - self.world_center.y),
            self.cell_rounding.to_cell(x - self.world_center.x),
        )
    }

    /// World position of a logical cell's corner.
    #[inline]
    pub fn logical_to_world(&self, logical: LogicalCoord) -> WorldPoint {
        WorldPoint::new(
            self.world_center.x + logical.col as f64,
            self.world_center.y + logical.row as f64,
        )
    }

    /// Read the cell at world `(x, y)` in `layer`.
    pub fn get_cell_value(&self, x: f64, y: f64, layer: &str) -> Result<T> {
        let logical = self.world_to_logical(x, y);
        Ok(self.layer(layer)?.get(logical))
    }

    /// Read the cell at world `(x, y)`, or `T::default()` for an unknown layer.
    pub fn get_cell_value_or_default(&self, x: f64, y: f64, layer: &str) -> T {
        self.get_cell_value(x, y, layer).unwrap_or_default()
    }

    /// Read the cell `(dx, dy)` away from the world center in `layer`.
    ///
    /// This is the robot-frame lookup: `(0, 0)` is the cell under the robot.
    pub fn get_relative_cell_value(&self, dx: f64, dy: f64, layer: &str) -> Result<T> {
        self.get_cell_value(self.world_center.x + dx, self.world_center.y + dy, layer)
    }

    /// Write the cell at world `(x, y)` in `layer`.
    pub fn set_cell_value(&mut self, x: f64, y: f64, value: T, layer: &str) -> Result<()> {
        let logical = self.world_to_logical(x, y);
        self.layer_mut(layer)?.set(logical, value);
        Ok(())
    }

    // =========================================================================
    // BULK ACCESS
    // =========================================================================

    /// Copy out a `view_width x view_height` window centered on the world
    /// center.
    pub fn get_view(&self, view_width: usize, view_height: usize, layer: &str) -> Result<GridStorage<T>> {
        Ok(self
            .layer(layer)?
            .view(LogicalCoord::ORIGIN, view_height, view_width))
    }

    /// Like [`get_view`](Self::get_view), but an unknown layer yields a grid
    /// of `T::default()`.
    pub fn get_view_or_default(&self, view_width: usize, view_height: usize, layer: &str) -> GridStorage<T> {
        self.get_view(view_width, view_height, layer)
            .unwrap_or_else(|_| GridStorage::with_default(view_width, view_height))
    }

    /// Reset every cell of `layer` to `value`, which also becomes the layer's
    /// fill value.
    pub fn reset_layer(&mut self, layer: &str, value: T) -> Result<()> {
        self.layer_mut(layer)?.reset(value);
        Ok(())
    }

    /// Reset every layer to the default fill value.
    pub fn clear(&mut self) {
        let fill = self.default_fill_value;
        for layer in self.layers.values_mut() {
            layer.reset(fill);
        }
    }
}
