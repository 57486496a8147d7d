//! JSON-file-backed recipe store
//!
//! The whole catalogue is held in memory and rewritten to disk after every
//! mutation. A mutation becomes visible to readers only after the write
//! succeeds. The file is a pretty-printed JSON array in insertion order.

use crate::error::CatalogError;
use crate::store::{MemoryStore, RecipeStore};
use recipebox_model::{Recipe, RecipeId};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Recipe store persisted to a JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty catalogue; it is created on first write.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let recipes: Vec<Recipe> = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(CatalogError::io(&path, err)),
        };
        tracing::info!(path = %path.display(), count = recipes.len(), "opened recipe store");

        Ok(Self {
            path,
            inner: MemoryStore::with_recipes(recipes),
        })
    }

    /// Backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current catalogue to disk
    ///
    /// # Errors
    /// Returns error if serialization or any filesystem step fails
    pub fn flush(&self) -> Result<(), CatalogError> {
        self.write_file(&self.inner.snapshot())
    }

    /// Writes a sibling temp file and renames it over the target.
    fn write_file<T: Serialize>(&self, recipes: &[T]) -> Result<(), CatalogError> {
        let json = serde_json::to_vec_pretty(recipes)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| CatalogError::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| CatalogError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "flushed recipe store");
        Ok(())
    }

    /// Run `op` against a staged copy, persist it, then make it current
    ///
    /// Memory is left untouched when `op` or the write fails.
    fn commit<F, R>(&self, op: F) -> Result<R, CatalogError>
    where
        F: FnOnce(&MemoryStore) -> Result<R, CatalogError>,
    {
        let mut current = self.inner.write();
        let staged = MemoryStore::from_map(current.clone());
        let out = op(&staged)?;
        let recipes = staged.into_map();
        self.write_file(&recipes.values().collect::<Vec<_>>())?;
        *current = recipes;
        Ok(out)
    }
}

impl RecipeStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Recipe>, CatalogError> {
        self.inner.load_all()
    }

    fn get(&self, id: RecipeId) -> Result<Option<Recipe>, CatalogError> {
        self.inner.get(id)
    }

    fn insert(&self, recipe: Recipe) -> Result<(), CatalogError> {
        self.commit(|staged| staged.insert(recipe))
    }

    fn update<F, R>(&self, id: RecipeId, f: F) -> Result<R, CatalogError>
    where
        F: FnOnce(&mut Recipe) -> R,
    {
        self.commit(|staged| staged.update(id, f))
    }

    fn remove(&self, id: RecipeId) -> Result<Recipe, CatalogError> {
        self.commit(|staged| staged.remove(id))
    }

    fn len(&self) -> Result<usize, CatalogError> {
        self.inner.len()
    }
}
