//! Engine configuration for parcours
//!
//! Search caps can be kept in a TOML file instead of being built in code:
//!
//! ```toml
//! version = 1
//!
//! [search]
//! max_paths = 1000
//! max_hops = 12
//! max_expansions = 100000
//! time_budget_ms = 250
//! ```

pub mod types;

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{ParcoursError, Result};
use crate::graph::SearchOptions;

pub use types::{EngineConfig, SearchConfig, CONFIG_FORMAT_VERSION};

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject versions this build cannot read and caps that can never succeed
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            return Err(ParcoursError::invalid_value(
                "config version",
                format!(
                    "{} (newest supported is {})",
                    self.version, CONFIG_FORMAT_VERSION
                ),
            ));
        }
        self.search_options().map(|_| ())
    }

    /// Search caps as [`SearchOptions`]
    pub fn search_options(&self) -> Result<SearchOptions> {
        let opts = SearchOptions {
            max_paths: self.search.max_paths,
            max_hops: self.search.max_hops,
            max_expansions: self.search.max_expansions,
            time_budget: self.search.time_budget_ms.map(Duration::from_millis),
        };
        opts.validate()?;
        Ok(opts)
    }
}
