//! Run configuration loaded from TOML
//!
//! Every field is optional. Command-line flags override file values.
//!
//! ```toml
//! protocol = "ccr"
//! rounds = 5000
//! seed = 7
//! carry_over = true
//! initial_rating_a = 1500.0
//! initial_rating_b = 1500.0
//!
//! [k_factor]
//! high_threshold = 2400.0
//! mid_threshold = 2000.0
//! high_k = 16.0
//! mid_k = 24.0
//! base_k = 32.0
//! ```

use std::path::Path;

use elo_core::{Bootstrap, BootstrapConfig, ScoreProtocol};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MosEloError, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mos_elo.toml";

/// Settings for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// How single-value score files are mapped to outcomes
    pub protocol: ScoreProtocol,
    #[serde(flatten)]
    pub bootstrap: BootstrapConfig,
}

impl RunConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::from_toml(&content)?;
                debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(MosEloError::io(path, e)),
        }
    }

    /// Build a validated bootstrap runner from these settings.
    pub fn bootstrap(&self) -> Result<Bootstrap> {
        Ok(Bootstrap::new(self.bootstrap.clone())?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
