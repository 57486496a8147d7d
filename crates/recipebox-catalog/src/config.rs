//! Catalogue configuration
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! store_path = "recipes.json"
//! seed_when_empty = true
//! default_scale = "1"
//! log_level = "warn"
//! ```

use crate::error::ConfigError;
use recipebox_model::ScaleFactor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalogue configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file holding the catalogue
    pub store_path: PathBuf,
    /// Insert the preview recipes when the store is empty
    pub seed_when_empty: bool,
    /// Scale used when none is requested
    pub default_scale: ScaleFactor,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl CatalogConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With store path
    #[inline]
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// With seeding switched on or off
    #[inline]
    #[must_use]
    pub fn with_seed_when_empty(mut self, seed: bool) -> Self {
        self.seed_when_empty = seed;
        self
    }

    /// With default scale
    #[inline]
    #[must_use]
    pub fn with_default_scale(mut self, scale: ScaleFactor) -> Self {
        self.default_scale = scale;
        self
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML or has mistyped keys
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Load from `path` if given and present, otherwise defaults
    ///
    /// # Errors
    /// Returns error if an existing file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "config file missing, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("recipes.json"),
            seed_when_empty: true,
            default_scale: ScaleFactor::Whole,
            log_level: "warn".to_string(),
        }
    }
}
