//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Stores: {}", loader.config().stores.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file does not exist
    /// and [`EngineError::ConfigParseError`] if it is not valid YAML for
    /// the expected shape.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;

        Ok(ConfigLoader { config })
    }

    /// Wraps an already-built configuration, used when no file is present.
    pub fn from_config(config: EngineConfig) -> Self {
        ConfigLoader { config }
    }

    /// The loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        ConfigLoader {
            config: EngineConfig::default(),
        }
    }
}
