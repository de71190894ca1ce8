//! Main ChakraConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::MapConfig;

use super::error::ConfigLoadError;
use super::map::MapSection;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ChakraConfig {
    /// Map settings
    #[serde(default)]
    pub map: MapSection,
}

impl ChakraConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        log::info!(
            "Loaded map config from {}: {}x{}, {} extra layer(s)",
            path.display(),
            config.map.width,
            config.map.height,
            config.map.layers.len()
        );
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{} not found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Serialize(e.to_string()))
    }

    /// Convert to MapConfig for LayeredGridMap
    pub fn to_map_config(&self) -> MapConfig {
        self.map.to_map_config()
    }
}
