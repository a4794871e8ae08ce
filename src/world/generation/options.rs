//! Generator options
//!
//! Options can be written by hand or loaded from a RON file such as:
//!
//! ```text
//! (
//!     min_leaf_size: 9,
//!     fill: true,
//! )
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GenerationError};

/// Smallest side a partition may be cut down to, unless overridden
pub const DEFAULT_MIN_LEAF_SIZE: i32 = 11;

/// Tunables for one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Minimum width/height of a partition; larger values give fewer, bigger rooms
    pub min_leaf_size: i32,
    /// Rooms fill their whole partition instead of being randomly inset
    pub fill: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            min_leaf_size: DEFAULT_MIN_LEAF_SIZE,
            fill: false,
        }
    }
}

impl GeneratorOptions {
    pub fn new(min_leaf_size: i32, fill: bool) -> Self {
        Self {
            min_leaf_size,
            fill,
        }
    }

    pub fn with_min_leaf_size(mut self, min_leaf_size: i32) -> Self {
        self.min_leaf_size = min_leaf_size;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.min_leaf_size < 1 {
            return Err(GenerationError::InvalidOptions(format!(
                "min_leaf_size must be at least 1, got {}",
                self.min_leaf_size
            )));
        }
        Ok(())
    }

    /// Parse options from RON text; missing fields keep their defaults
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// Load options from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&content)
    }

    /// Load options from a RON file, falling back to defaults if it is missing or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Using default generator options, {:?} unusable: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}
