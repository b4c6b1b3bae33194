//! CLI configuration
//!
//! Read from an optional TOML file:
//!
//! ```toml
//! log_filter = "pyramid_core=debug,info"
//!
//! [validation]
//! weighting_threshold = 0.35
//! ```

use anyhow::Context;
use pyramid_validation::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default `tracing` filter when neither `RUST_LOG` nor the file sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidConfig {
    /// Validator settings
    pub validation: ValidationConfig,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            validation: ValidationConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PyramidConfig {
    /// Parse from TOML text
    ///
    /// # Errors
    /// Fails on malformed TOML or mistyped fields
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("invalid configuration")?;
        Ok(config.normalized())
    }

    /// Load from a file, or defaults when no path is given
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// With weighting threshold
    #[inline]
    #[must_use]
    pub fn with_weighting_threshold(mut self, threshold: f64) -> Self {
        self.validation = self.validation.with_weighting_threshold(threshold);
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    fn normalized(mut self) -> Self {
        self.validation = self.validation.normalized();
        self
    }
}
