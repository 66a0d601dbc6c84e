//! Startup configuration
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change:
//!
//! ```toml
//! structure = "linked-list"
//! speed = 80
//! message_ttl_ms = 3000
//!
//! [pacing]
//! base_delay_ms = 600
//!
//! [seeds]
//! array = [9, 4, 7, 1]
//! ```

use crate::error::ConfigError;
use crate::narrator::{AnimationSpeed, PacingConfig};
use crate::ops::StructureKind;
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default collection each structure starts from and resets to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seeds {
    pub array: Vec<i64>,
    pub stack: Vec<i64>,
    pub queue: Vec<i64>,
    pub linked_list: Vec<i64>,
}

impl Default for Seeds {
    fn default() -> Self {
        Seeds {
            array: StructureKind::Array.default_seed(),
            stack: StructureKind::Stack.default_seed(),
            queue: StructureKind::Queue.default_seed(),
            linked_list: StructureKind::LinkedList.default_seed(),
        }
    }
}

impl Seeds {
    pub fn values(&self, kind: StructureKind) -> &[i64] {
        match kind {
            StructureKind::Array => &self.array,
            StructureKind::Stack => &self.stack,
            StructureKind::Queue => &self.queue,
            StructureKind::LinkedList => &self.linked_list,
        }
    }

    /// Fresh seed sequence for `kind`
    pub fn sequence(&self, kind: StructureKind) -> Sequence {
        Sequence::from_values(self.values(kind))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Structure shown at startup
    pub structure: StructureKind,
    pub speed: AnimationSpeed,
    pub pacing: PacingConfig,
    /// How long status messages stay visible
    pub message_ttl_ms: u64,
    /// Memory budget for the sort step history
    pub history_limit_bytes: usize,
    pub seeds: Seeds,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            structure: StructureKind::Array,
            speed: AnimationSpeed::default(),
            pacing: PacingConfig::default(),
            message_ttl_ms: 2000,
            history_limit_bytes: 16 * 1024 * 1024,
            seeds: Seeds::default(),
        }
    }
}

impl VisualizerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pacing.min_delay_ms > self.pacing.base_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "min_delay_ms ({}) is larger than base_delay_ms ({})",
                self.pacing.min_delay_ms, self.pacing.base_delay_ms
            )));
        }
        Ok(())
    }
}
