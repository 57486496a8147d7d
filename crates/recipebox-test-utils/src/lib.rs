//! Testing utilities for the recipebox workspace
//!
//! Shared fixtures: fixed timestamps and small recipes with known ordering
//! quirks.

#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use recipebox_model::{Cuisine, Instruction, MealCourse, Recipe, RecipeIngredient};

/// Fixed instant `secs` seconds after the epoch
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub fn ingredient(name: &str, quantity: Option<f64>, unit: Option<&str>) -> RecipeIngredient {
    let mut ri = RecipeIngredient::named(name);
    ri.quantity = quantity;
    ri.unit = unit.map(str::to_string);
    ri
}

pub fn sectioned(name: &str, section: &str, position: Option<i64>) -> RecipeIngredient {
    let mut ri = RecipeIngredient::named(name).in_section(section);
    ri.position = position;
    ri
}

pub fn recipe(name: &str, course: MealCourse) -> Recipe {
    Recipe::new(name, Cuisine::American, course)
}

/// Two sections, one unused label, sentinel ties and an unlisted label
pub fn stir_fry() -> Recipe {
    Recipe::new("Stir Fry", Cuisine::chinese("Sichuan"), MealCourse::Main)
        .with_ingredients(vec![
            ingredient("rice", Some(2.0), Some("cups")),
            sectioned("garlic", "Aromatics", Some(2)),
            sectioned("soy sauce", "Sauce", None),
            sectioned("ginger", "Aromatics", Some(1)),
            sectioned("vinegar", "Sauce", Some(3)),
            sectioned("sugar", "Sauce", None),
            ingredient("scallions", Some(3.0), None),
            sectioned("stray", "Garnish", Some(1)),
        ])
        .with_instructions(vec![
            Instruction::at(3, "Toss"),
            Instruction::at(1, "Mix sauce"),
            Instruction::at(2, "Fry aromatics"),
        ])
        .with_section_labels(["Aromatics", "Sauce", "Marinade"])
}
