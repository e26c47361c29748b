//! Playground configuration.
//!
//! Loaded from TOML or YAML depending on the file extension. Every field is
//! optional in the file and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arena::DEFAULT_MAX_ROUNDS;
use crate::error::{CoreError, CoreResult};

/// Runtime settings for the CLI and the library helpers that take them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Character used to draw histogram bars
    pub histogram_bar: char,
    /// Strike limit for arena duels
    pub arena_max_rounds: u32,
    /// Prefix prepended to every logger line
    pub logger_prefix: Option<String>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            histogram_bar: '#',
            arena_max_rounds: DEFAULT_MAX_ROUNDS,
            logger_prefix: None,
        }
    }
}

impl PlaygroundConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            _ => Self::from_toml(&content)?,
        };

        config.validate().map_err(|message| CoreError::InvalidConfig {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(CoreError::from)
    }

    /// Parse a config from a YAML string.
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        serde_yaml::from_str(content).map_err(CoreError::from)
    }

    /// Check value bounds, returning a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.arena_max_rounds == 0 {
            return Err("arena_max_rounds must be at least 1".to_string());
        }
        if self.histogram_bar.is_whitespace() {
            return Err("histogram_bar must be a visible character".to_string());
        }
        Ok(())
    }
}
