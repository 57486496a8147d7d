//! Recipe stores
//!
//! [`RecipeStore`] is the persistence boundary. Implementations own the
//! recipes; callers read sorted snapshots and mutate in place through
//! [`RecipeStore::update`]. Writes are visible to the next read.

use crate::error::CatalogError;
use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockWriteGuard};
use recipebox_model::{Recipe, RecipeId};

/// Persistence boundary for recipes
pub trait RecipeStore {
    /// All recipes, ascending by name
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be read
    fn load_all(&self) -> Result<Vec<Recipe>, CatalogError>;

    /// Recipe by id
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be read
    fn get(&self, id: RecipeId) -> Result<Option<Recipe>, CatalogError>;

    /// Add a recipe
    ///
    /// # Errors
    /// Returns [`CatalogError::Duplicate`] if the id is taken, or a storage error
    fn insert(&self, recipe: Recipe) -> Result<(), CatalogError>;

    /// Mutate a stored recipe in place
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if the id is unknown, or a storage error
    fn update<F, R>(&self, id: RecipeId, f: F) -> Result<R, CatalogError>
    where
        F: FnOnce(&mut Recipe) -> R;

    /// Delete a recipe, returning it
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if the id is unknown, or a storage error
    fn remove(&self, id: RecipeId) -> Result<Recipe, CatalogError>;

    /// Number of stored recipes
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be read
    fn len(&self) -> Result<usize, CatalogError>;

    /// Check whether the store holds no recipes
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be read
    fn is_empty(&self) -> Result<bool, CatalogError> {
        Ok(self.len()? == 0)
    }
}

/// Sort recipes by name, keeping insertion order for equal names
pub(crate) fn sort_by_name(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| a.name.cmp(&b.name));
}

/// In-process recipe store
///
/// Keeps insertion order internally; reads are sorted by name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    recipes: RwLock<IndexMap<RecipeId, Recipe>>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the given recipes
    ///
    /// Later duplicates of an id replace earlier ones.
    #[must_use]
    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self::from_map(recipes.into_iter().map(|r| (r.id, r)).collect())
    }

    /// Recipes in insertion order
    #[must_use]
    pub fn snapshot(&self) -> Vec<Recipe> {
        self.recipes.read().values().cloned().collect()
    }

    pub(crate) fn from_map(recipes: IndexMap<RecipeId, Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    pub(crate) fn into_map(self) -> IndexMap<RecipeId, Recipe> {
        self.recipes.into_inner()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, IndexMap<RecipeId, Recipe>> {
        self.recipes.write()
    }
}

impl RecipeStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Recipe>, CatalogError> {
        let mut recipes = self.snapshot();
        sort_by_name(&mut recipes);
        Ok(recipes)
    }

    fn get(&self, id: RecipeId) -> Result<Option<Recipe>, CatalogError> {
        Ok(self.recipes.read().get(&id).cloned())
    }

    fn insert(&self, recipe: Recipe) -> Result<(), CatalogError> {
        let mut guard = self.recipes.write();
        if guard.contains_key(&recipe.id) {
            return Err(CatalogError::Duplicate(recipe.id));
        }
        guard.insert(recipe.id, recipe);
        Ok(())
    }

    fn update<F, R>(&self, id: RecipeId, f: F) -> Result<R, CatalogError>
    where
        F: FnOnce(&mut Recipe) -> R,
    {
        let mut guard = self.recipes.write();
        let recipe = guard.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        Ok(f(recipe))
    }

    fn remove(&self, id: RecipeId) -> Result<Recipe, CatalogError> {
        self.recipes
            .write()
            .shift_remove(&id)
            .ok_or(CatalogError::NotFound(id))
    }

    fn len(&self) -> Result<usize, CatalogError> {
        Ok(self.recipes.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_model::{Cuisine, MealCourse};

    fn recipe(name: &str) -> Recipe {
        Recipe::new(name, Cuisine::American, MealCourse::Main)
    }

    #[test]
    fn load_all_sorts_by_name() {
        let store = MemoryStore::with_recipes([recipe("Pie"), recipe("Apple"), recipe("Mash")]);
        let names: Vec<_> = store.load_all().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Apple", "Mash", "Pie"]);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let store = MemoryStore::new();
        let r = recipe("Soup");
        store.insert(r.clone()).unwrap();
        assert!(matches!(store.insert(r), Err(CatalogError::Duplicate(_))));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn update_is_visible_to_next_read() {
        let store = MemoryStore::new();
        let r = recipe("Soup");
        let id = r.id;
        store.insert(r).unwrap();

        store.update(id, |r| r.notes = "more salt".to_string()).unwrap();
        assert_eq!(store.get(id).unwrap().unwrap().notes, "more salt");
    }

    #[test]
    fn update_unknown_id() {
        let store = MemoryStore::new();
        let err = store.update(RecipeId::new(), |_| ()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn remove_returns_recipe() {
        let store = MemoryStore::new();
        let r = recipe("Soup");
        let id = r.id;
        store.insert(r).unwrap();

        assert_eq!(store.remove(id).unwrap().name, "Soup");
        assert!(store.is_empty().unwrap());
        assert!(store.remove(id).is_err());
    }
}
