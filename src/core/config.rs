//! Console configuration with documented defaults
//!
//! Values are read from an optional TOML file. Every field has a default,
//! so a partial file (or no file at all) is valid.

use crate::core::error::{ConsoleError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for the console front end
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// How many competing candidates an ambiguity message lists
    ///
    /// Longer candidate lists are cut off with an "... and N more" line.
    /// Must be at least 1, otherwise an ambiguity message would name nobody.
    pub max_listed_candidates: usize,

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub log_filter: String,

    /// Prompt printed by the interactive loop
    pub prompt: String,

    /// Roster file to load at startup (falls back to the bundled roster)
    pub roster_path: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_listed_candidates: 10,
            log_filter: "campaign_console=info".to_string(),
            prompt: "> ".to_string(),
            roster_path: None,
        }
    }
}

impl ConsoleConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ConsoleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_listed_candidates == 0 {
            return Err(ConsoleError::InvalidConfig(
                "max_listed_candidates must be at least 1".into(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "log_filter must not be empty".into(),
            ));
        }

        Ok(())
    }
}
