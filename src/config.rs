//! Search configuration.
//!
//! Everything has a default, so an empty JSON object `{}` is a valid config. The CLI loads
//! an optional file and then applies its own flags on top.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::search::resources::SearchLimits;
use crate::search::Strategy;

fn default_add_found_words() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default)]
    pub strategy: Strategy,
    /// Run batch searches on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub limits: SearchLimits,
    /// Add a word found by an ad-hoc search to the dictionary.
    #[serde(default = "default_add_found_words")]
    pub add_found_words: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            parallel: false,
            limits: SearchLimits::default(),
            add_found_words: default_add_found_words(),
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_frontier_nodes == 0 {
            return Err(ConfigError::Invalid {
                reason: "limits.max_frontier_nodes must be >= 1".to_string(),
            });
        }
        if self.limits.max_steps == 0 {
            return Err(ConfigError::Invalid {
                reason: "limits.max_steps must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}
