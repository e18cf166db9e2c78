//! Level pack configuration.

use super::error::{ConfigurationError, ConfigurationErrorKind};
use super::level::LevelDefinition;
use super::session::MAX_RINGS_PER_PEG;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Largest peg capacity a level pack may declare.
pub const MAX_PEG_CAPACITY: usize = 64;

/// A pack of levels sharing one peg capacity.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rings per peg.
    #[serde(default = "default_capacity")]
    capacity: usize,

    /// Levels in play order.
    #[serde(default)]
    levels: Vec<LevelDefinition>,
}

#[instrument]
fn default_capacity() -> usize {
    MAX_RINGS_PER_PEG
}

impl GameConfig {
    /// Creates a configuration from parts.
    #[instrument(skip(levels), fields(levels = levels.len()))]
    pub fn new(capacity: usize, levels: Vec<LevelDefinition>) -> Self {
        Self { capacity, levels }
    }

    /// Loads and validates a pack from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        debug!("Loading level pack from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigurationError::new(ConfigurationErrorKind::Read(e.to_string())))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a pack from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigurationError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigurationError::new(ConfigurationErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        info!(
            capacity = config.capacity,
            levels = config.levels.len(),
            "Level pack loaded"
        );
        Ok(config)
    }

    /// Validates the capacity and every level.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.capacity == 0 {
            return Err(ConfigurationError::new(ConfigurationErrorKind::ZeroCapacity));
        }
        if self.capacity > MAX_PEG_CAPACITY {
            return Err(ConfigurationError::new(
                ConfigurationErrorKind::CapacityTooLarge {
                    capacity: self.capacity,
                    max: MAX_PEG_CAPACITY,
                },
            ));
        }
        for level in &self.levels {
            level.validate(self.capacity)?;
        }
        Ok(())
    }

    /// Looks up a level by index.
    pub fn level(&self, index: usize) -> Result<&LevelDefinition, ConfigurationError> {
        self.levels.get(index).ok_or_else(|| {
            ConfigurationError::new(ConfigurationErrorKind::UnknownLevel {
                index,
                count: self.levels.len(),
            })
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_RINGS_PER_PEG, Vec::new())
    }
}
