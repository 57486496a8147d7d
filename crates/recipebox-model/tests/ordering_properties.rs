//! Property tests for ordering and filtering guarantees.
//!
//! Positions are drawn from a tiny range and often left unset so that ties,
//! including ties with the unordered key, are common.

use proptest::prelude::*;
use recipebox_model::{
    filter_by_meal_course, position_key, Cuisine, Instruction, MealCourse, Recipe, RecipeIngredient,
};
use recipebox_test_utils::{at, recipe};

const LABELS: [&str; 3] = ["A", "B", "C"];

fn position() -> impl Strategy<Value = Option<i64>> {
    prop_oneof![Just(None), (0i64..4).prop_map(Some), Just(Some(999_999))]
}

fn ingredient_entries() -> impl Strategy<Value = Vec<(Option<usize>, Option<i64>)>> {
    prop::collection::vec((prop::option::of(0usize..LABELS.len()), position()), 0..24)
}

fn course() -> impl Strategy<Value = MealCourse> {
    prop::sample::select(MealCourse::ALL.to_vec())
}

fn build(entries: &[(Option<usize>, Option<i64>)]) -> Recipe {
    let ingredients = entries
        .iter()
        .enumerate()
        .map(|(i, (label, position))| {
            let mut ri = RecipeIngredient::named(i.to_string());
            ri.section_label = label.map(|l| LABELS[l].to_string());
            ri.position = *position;
            ri
        })
        .collect();
    Recipe::new("prop", Cuisine::American, MealCourse::Main).with_ingredients(ingredients)
}

proptest! {
    #[test]
    fn section_is_filtered_and_stably_sorted(entries in ingredient_entries(), label in 0usize..LABELS.len()) {
        let recipe = build(&entries);

        let mut expected: Vec<(usize, i64)> = entries
            .iter()
            .enumerate()
            .filter(|(_, (l, _))| *l == Some(label))
            .map(|(i, (_, p))| (i, position_key(*p)))
            .collect();
        expected.sort_by_key(|(_, key)| *key);
        let expected: Vec<String> = expected.into_iter().map(|(i, _)| i.to_string()).collect();

        let actual: Vec<String> = recipe
            .ingredients_for_section(LABELS[label])
            .into_iter()
            .map(|ri| ri.name().to_string())
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn unsectioned_keeps_insertion_order(entries in ingredient_entries()) {
        let recipe = build(&entries);
        let expected: Vec<String> = entries
            .iter()
            .enumerate()
            .filter(|(_, (l, _))| l.is_none())
            .map(|(i, _)| i.to_string())
            .collect();
        let actual: Vec<String> = recipe
            .unsectioned_ingredients()
            .into_iter()
            .map(|ri| ri.name().to_string())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn instructions_stored_sorted(positions in prop::collection::vec(position(), 0..16)) {
        let steps = positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut step = Instruction::new(i.to_string());
                step.position = *p;
                step
            })
            .collect();
        let recipe = Recipe::new("r", Cuisine::Japanese, MealCourse::Side).with_instructions(steps);

        let stored = recipe.instructions();
        prop_assert_eq!(stored.len(), positions.len());
        for pair in stored.windows(2) {
            prop_assert!(pair[0].sort_key() <= pair[1].sort_key());
            if pair[0].sort_key() == pair[1].sort_key() {
                let a: usize = pair[0].instruction_text.parse().unwrap();
                let b: usize = pair[1].instruction_text.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn course_filter_is_ordered_subsequence(courses in prop::collection::vec(course(), 0..20), wanted in course()) {
        let recipes: Vec<Recipe> = courses
            .iter()
            .enumerate()
            .map(|(i, c)| recipe(&i.to_string(), *c))
            .collect();

        let filtered: Vec<&str> = filter_by_meal_course(wanted, &recipes)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        let expected: Vec<String> = courses
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == wanted)
            .map(|(i, _)| i.to_string())
            .collect();

        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn double_toggle_ends_unprepared(first in 0i64..1_000_000, second in 0i64..1_000_000) {
        let mut r = recipe("r", MealCourse::Main);
        r.toggle_prepared(at(first));
        prop_assert_eq!(r.last_prepared_at, Some(at(first)));
        r.toggle_prepared(at(second));
        prop_assert_eq!(r.last_prepared_at, None);
    }

    #[test]
    fn unchecked_form_always_clears(prior in prop::option::of(0i64..1_000_000), form_time in 0i64..1_000_000) {
        let mut r = recipe("r", MealCourse::Dessert);
        r.last_prepared_at = prior.map(at);

        let mut form = r.to_form_data_at(at(form_time));
        form.previously_prepared = false;
        r.apply_form_data(&form);

        prop_assert_eq!(r.last_prepared_at, None);
    }
}
