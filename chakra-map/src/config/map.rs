//! Map configuration section.

use serde::{Deserialize, Serialize};

use crate::core::CellRounding;
use crate::grid::{MapConfig, SweepAnchor};

use super::defaults;

/// Map configuration section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapSection {
    /// Window width (cells)
    #[serde(default = "defaults::window_size")]
    pub width: usize,

    /// Window height (cells)
    #[serde(default = "defaults::window_size")]
    pub height: usize,

    /// Extra layers created alongside "default"
    #[serde(default)]
    pub layers: Vec<String>,

    /// World-to-cell conversion: "truncate" or "floor"
    #[serde(default)]
    pub cell_rounding: CellRounding,

    /// Preserved window on moves: "origin" or "centered"
    #[serde(default)]
    pub sweep_anchor: SweepAnchor,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            width: defaults::window_size(),
            height: defaults::window_size(),
            layers: Vec::new(),
            cell_rounding: CellRounding::Truncate,
            sweep_anchor: SweepAnchor::Origin,
        }
    }
}

impl MapSection {
    /// Convert to MapConfig
    pub fn to_map_config(&self) -> MapConfig {
        MapConfig {
            width: self.width,
            height: self.height,
            layers: self.layers.clone(),
            cell_rounding: self.cell_rounding,
            sweep_anchor: self.sweep_anchor,
        }
    }
}
