//! Configuration types for the rolling grid map.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::CellRounding;

use super::sweep::SweepAnchor;

/// Name of the layer every map starts with.
pub const DEFAULT_LAYER: &str = "default";

/// Map configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Window width in cells (columns, world X)
    pub width: usize,

    /// Window height in cells (rows, world Y)
    pub height: usize,

    /// Layers created in addition to [`DEFAULT_LAYER`]
    pub layers: Vec<String>,

    /// World-to-cell conversion for point queries
    pub cell_rounding: CellRounding,

    /// Which window the sweep preserves on a move
    pub sweep_anchor: SweepAnchor,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            layers: Vec::new(),
            cell_rounding: CellRounding::Truncate,
            sweep_anchor: SweepAnchor::Origin,
        }
    }
}

impl MapConfig {
    /// Create a configuration for a `width x height` window.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Add a layer name (builder style).
    pub fn with_layer(mut self, name: impl Into<String>) -> Self {
        self.layers.push(name.into());
        self
    }

    /// Set the sweep anchor (builder style).
    pub fn with_sweep_anchor(mut self, anchor: SweepAnchor) -> Self {
        self.sweep_anchor = anchor;
        self
    }

    /// Set the cell rounding mode (builder style).
    pub fn with_cell_rounding(mut self, rounding: CellRounding) -> Self {
        self.cell_rounding = rounding;
        self
    }

    /// Number of cells per layer.
    pub fn cells_per_layer(&self) -> usize {
        self.width * self.height
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidValue(format!(
                "window must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }

        if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
            return Err(ConfigError::InvalidValue(format!(
                "window {}x{} exceeds the logical coordinate range",
                self.width, self.height
            )));
        }

        for (i, name) in self.layers.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "layer name at index {} is empty",
                    i
                )));
            }
            if self.layers[..i].contains(name) {
                return Err(ConfigError::DuplicateLayer(name.clone()));
            }
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field is out of range
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// The same layer name appears twice
    #[error("Duplicate layer: {0}")]
    DuplicateLayer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 200);
        assert_eq!(config.cells_per_layer(), 40_000);
        assert_eq!(config.cell_rounding, CellRounding::Truncate);
        assert_eq!(config.sweep_anchor, SweepAnchor::Origin);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MapConfig::new(10, 20)
            .with_layer("obstacle")
            .with_layer("navigation")
            .with_sweep_anchor(SweepAnchor::Centered)
            .with_cell_rounding(CellRounding::Floor);

        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.layers, vec!["obstacle", "navigation"]);
        assert_eq!(config.sweep_anchor, SweepAnchor::Centered);
        assert_eq!(config.cell_rounding, CellRounding::Floor);
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        assert!(matches!(
            MapConfig::new(0, 10).validate(),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(MapConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_layers() {
        let config = MapConfig::new(10, 10).with_layer("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));

        let config = MapConfig::new(10, 10)
            .with_layer("cost")
            .with_layer("cost");
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateLayer("cost".to_string()))
        );
    }
}
