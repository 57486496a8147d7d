//! Error types for the recipe catalogue

use recipebox_model::RecipeId;
use std::path::PathBuf;

/// Catalogue and store errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No recipe with this id
    #[error("recipe not found: {0}")]
    NotFound(RecipeId),

    /// A recipe with this id is already stored
    #[error("recipe already exists: {0}")]
    Duplicate(RecipeId),

    /// Reading or writing the backing file failed
    #[error("store i/o failed for {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a valid recipe list
    #[error("store serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CatalogError {
    /// Check if error is a missing recipe
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`CatalogConfig`](crate::CatalogConfig)
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
