//! Catalogue service
//!
//! Drives the model operations against a [`RecipeStore`]: seeding, sorted
//! listing, course filtering, form create/update and the prepared toggle.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::seed;
use crate::store::RecipeStore;
use chrono::{DateTime, Utc};
use recipebox_model::{filter_by_meal_course, FormData, MealCourse, Recipe, RecipeId};

/// Recipe catalogue over a store
#[derive(Debug)]
pub struct Catalog<S> {
    store: S,
    config: CatalogConfig,
}

impl<S: RecipeStore> Catalog<S> {
    /// Create catalogue
    #[inline]
    #[must_use]
    pub fn new(store: S, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Seed the preview recipes into an empty store
    ///
    /// Does nothing when the store has recipes or seeding is disabled.
    /// Returns the number of recipes inserted.
    ///
    /// # Errors
    /// Returns error if the store cannot be read or written
    pub fn bootstrap(&self) -> Result<usize, CatalogError> {
        if !self.config.seed_when_empty || !self.store.is_empty()? {
            return Ok(0);
        }
        let recipes = seed::preview_recipes();
        let count = recipes.len();
        for recipe in recipes {
            self.store.insert(recipe)?;
        }
        tracing::info!(count, "seeded empty catalogue with preview recipes");
        Ok(count)
    }

    /// All recipes, ascending by name
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub fn recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        self.store.load_all()
    }

    /// Recipes of one course, ascending by name
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub fn recipes_for_course(&self, course: MealCourse) -> Result<Vec<Recipe>, CatalogError> {
        let recipes = self.store.load_all()?;
        Ok(filter_by_meal_course(course, &recipes)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Recipe by id
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if the id is unknown
    pub fn get(&self, id: RecipeId) -> Result<Recipe, CatalogError> {
        self.store.get(id)?.ok_or(CatalogError::NotFound(id))
    }

    /// First recipe whose name matches, ignoring case
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub fn find_by_name(&self, name: &str) -> Result<Option<Recipe>, CatalogError> {
        let wanted = name.trim().to_lowercase();
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .find(|r| r.name.to_lowercase() == wanted))
    }

    /// Create and store a recipe from a form
    ///
    /// # Errors
    /// Returns error if the store cannot be written
    pub fn create_from_form(&self, form: &FormData) -> Result<RecipeId, CatalogError> {
        let recipe = Recipe::from_form_data(form);
        let id = recipe.id;
        self.store.insert(recipe)?;
        tracing::info!(recipe_id = %id, name = %form.name, "created recipe");
        Ok(id)
    }

    /// Apply a form to a stored recipe
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if the id is unknown, or a store error
    pub fn update_from_form(&self, id: RecipeId, form: &FormData) -> Result<(), CatalogError> {
        self.store.update(id, |recipe| recipe.apply_form_data(form))
    }

    /// Flip a recipe's prepared state, returning the new timestamp
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if the id is unknown, or a store error
    pub fn toggle_prepared(
        &self,
        id: RecipeId,
        now: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, CatalogError> {
        self.store.update(id, |recipe| {
            recipe.toggle_prepared(now);
            recipe.last_prepared_at
        })
    }

    /// Delete a recipe
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if the id is unknown, or a store error
    pub fn remove(&self, id: RecipeId) -> Result<Recipe, CatalogError> {
        let removed = self.store.remove(id)?;
        tracing::info!(recipe_id = %id, name = %removed.name, "removed recipe");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;
    use recipebox_model::Cuisine;

    fn catalog() -> Catalog<MemoryStore> {
        Catalog::new(MemoryStore::new(), CatalogConfig::default())
    }

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn bootstrap_seeds_once() {
        let catalog = catalog();
        assert_eq!(catalog.bootstrap().unwrap(), 4);
        assert_eq!(catalog.bootstrap().unwrap(), 0);
        assert_eq!(catalog.recipes().unwrap().len(), 4);
    }

    #[test]
    fn bootstrap_respects_config() {
        let catalog = Catalog::new(
            MemoryStore::new(),
            CatalogConfig::default().with_seed_when_empty(false),
        );
        assert_eq!(catalog.bootstrap().unwrap(), 0);
        assert!(catalog.recipes().unwrap().is_empty());
    }

    #[test]
    fn bootstrap_skips_non_empty_store() {
        let store = MemoryStore::with_recipes([Recipe::new("Mine", Cuisine::American, MealCourse::Main)]);
        let catalog = Catalog::new(store, CatalogConfig::default());
        assert_eq!(catalog.bootstrap().unwrap(), 0);
        assert_eq!(catalog.recipes().unwrap().len(), 1);
    }

    #[test]
    fn seeded_list_is_name_sorted() {
        let catalog = catalog();
        catalog.bootstrap().unwrap();
        let names: Vec<_> = catalog.recipes().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "Dry-fried Green Beans",
                "Gong Bao Chicken With Peanuts",
                "Green Beans with Miso Butter",
                "Rigatoni with Beef and Onion Ragu",
            ]
        );
    }

    #[test]
    fn course_filter_over_sorted_list() {
        let catalog = catalog();
        catalog.bootstrap().unwrap();
        let sides: Vec<_> = catalog
            .recipes_for_course(MealCourse::Side)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(sides, vec!["Dry-fried Green Beans", "Green Beans with Miso Butter"]);
        assert!(catalog.recipes_for_course(MealCourse::Dessert).unwrap().is_empty());
    }

    #[test]
    fn find_by_name_ignores_case() {
        let catalog = catalog();
        catalog.bootstrap().unwrap();
        let found = catalog.find_by_name("dry-fried green beans").unwrap();
        assert_eq!(found.map(|r| r.name).as_deref(), Some("Dry-fried Green Beans"));
        assert!(catalog.find_by_name("toast").unwrap().is_none());
    }

    #[test]
    fn toggle_round_trip() {
        let catalog = catalog();
        let id = catalog.create_from_form(&FormData::new_at(t(0))).unwrap();

        assert_eq!(catalog.toggle_prepared(id, t(10)).unwrap(), Some(t(10)));
        assert_eq!(catalog.toggle_prepared(id, t(20)).unwrap(), None);
        assert!(!catalog.get(id).unwrap().is_prepared());
    }

    #[test]
    fn edit_session_round_trip() {
        let catalog = catalog();
        let mut form = FormData::new_at(t(0));
        form.name = "Toast".to_string();
        let id = catalog.create_from_form(&form).unwrap();

        catalog.toggle_prepared(id, t(50)).unwrap();
        let mut edit = catalog.get(id).unwrap().begin_edit_at(t(99));
        assert!(edit.previously_prepared);
        assert_eq!(edit.last_prepared_at, t(50));

        edit.details = "crunchy".to_string();
        catalog.update_from_form(id, &edit).unwrap();
        let stored = catalog.get(id).unwrap();
        assert_eq!(stored.details.as_deref(), Some("crunchy"));
        assert_eq!(stored.last_prepared_at, Some(t(50)));

        edit.previously_prepared = false;
        catalog.update_from_form(id, &edit).unwrap();
        assert_eq!(catalog.get(id).unwrap().last_prepared_at, None);
    }

    #[test]
    fn missing_recipe_errors() {
        let catalog = catalog();
        let id = RecipeId::new();
        assert!(catalog.get(id).unwrap_err().is_not_found());
        assert!(catalog.toggle_prepared(id, t(0)).unwrap_err().is_not_found());
        assert!(catalog
            .update_from_form(id, &FormData::new_at(t(0)))
            .unwrap_err()
            .is_not_found());
        assert!(catalog.remove(id).unwrap_err().is_not_found());
    }
}
