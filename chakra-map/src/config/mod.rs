//! Configuration file loading.
//!
//! Loads map configuration from a YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chakra_map::config::ChakraConfig;
//!
//! // Load from default path (configs/config.yaml), or built-in defaults
//! let config = ChakraConfig::load_default()?;
//!
//! // Convert to the runtime config
//! let map_config = config.to_map_config();
//! let map = LayeredGridMap::from_config(&map_config, 0.0f32)?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! map:
//!   width: 200              # cells along world X
//!   height: 200             # cells along world Y
//!   layers: [obstacle, navigation]
//!   cell_rounding: truncate # or "floor"
//!   sweep_anchor: origin    # or "centered"
//! ```

mod chakra;
mod defaults;
mod error;
mod map;

pub use chakra::{ChakraConfig, DEFAULT_CONFIG_PATH};
pub use error::ConfigLoadError;
pub use map::MapSection;
