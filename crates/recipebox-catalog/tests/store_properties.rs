//! Property tests for store listing order.

use proptest::prelude::*;
use recipebox_catalog::{JsonFileStore, MemoryStore, RecipeStore};
use recipebox_model::{MealCourse, Recipe, RecipeId};
use recipebox_test_utils::recipe;

const NAMES: [&str; 4] = ["Apple Pie", "Miso Beans", "Ragu", "apple pie"];

fn name_lists() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(NAMES.to_vec()), 0..16)
}

fn recipes(names: &[&str]) -> Vec<Recipe> {
    names.iter().map(|name| recipe(name, MealCourse::Main)).collect()
}

/// Ids in name order, equal names keeping insertion order
fn expected_order(recipes: &[Recipe]) -> Vec<RecipeId> {
    let mut indexed: Vec<(usize, &Recipe)> = recipes.iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| a.name.cmp(&b.name).then(ia.cmp(ib)));
    indexed.into_iter().map(|(_, r)| r.id).collect()
}

proptest! {
    #[test]
    fn memory_listing_is_name_sorted_and_stable(names in name_lists()) {
        let recipes = recipes(&names);
        let expected = expected_order(&recipes);

        let store = MemoryStore::with_recipes(recipes);
        let listed: Vec<RecipeId> = store.load_all().unwrap().into_iter().map(|r| r.id).collect();

        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn file_listing_survives_reopen(names in name_lists()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let recipes = recipes(&names);
        let expected = expected_order(&recipes);

        {
            let store = JsonFileStore::open(&path).unwrap();
            for recipe in recipes {
                store.insert(recipe).unwrap();
            }
        }
        let reopened = JsonFileStore::open(&path).unwrap();
        let listed: Vec<RecipeId> = reopened.load_all().unwrap().into_iter().map(|r| r.id).collect();

        prop_assert_eq!(listed, expected);
    }
}
