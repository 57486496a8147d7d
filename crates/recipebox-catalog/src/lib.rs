//! Recipe Box Catalogue
//!
//! The persistence side of the recipe model.
//!
//! # Overview
//!
//! - [`RecipeStore`]: storage boundary, implemented by [`MemoryStore`] and [`JsonFileStore`]
//! - [`Catalog`]: seeding, sorted listing, form create/update and prepared toggling
//! - [`CatalogConfig`]: TOML configuration
//! - [`seed::preview_recipes`]: the bundled example recipes
//!
//! # Example
//!
//! ```rust
//! use recipebox_catalog::{Catalog, CatalogConfig, MemoryStore};
//! use recipebox_model::MealCourse;
//!
//! let catalog = Catalog::new(MemoryStore::new(), CatalogConfig::default());
//! catalog.bootstrap().unwrap();
//!
//! let sides = catalog.recipes_for_course(MealCourse::Side).unwrap();
//! assert_eq!(sides.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod file_store;
pub mod seed;
pub mod store;

// Re-exports
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, ConfigError};
pub use file_store::JsonFileStore;
pub use store::{MemoryStore, RecipeStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
