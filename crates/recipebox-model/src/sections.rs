//! Sectioned ingredient view
//!
//! Render order is: the unlabelled group, then each entry of
//! `section_labels` in order. Labelled groups are emitted even when no
//! ingredient carries the label.

use crate::display::format_ingredient_line;
use crate::ingredient::RecipeIngredient;
use crate::recipe::Recipe;

/// One group of ingredients under an optional heading
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientSection<'a> {
    /// Heading; `None` for the top-level group
    pub label: Option<&'a str>,
    /// Members in display order
    pub ingredients: Vec<&'a RecipeIngredient>,
}

impl IngredientSection<'_> {
    /// Formatted lines at the given scale
    #[must_use]
    pub fn lines(&self, scale: f64) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ri| format_ingredient_line(ri, scale))
            .collect()
    }
}

/// All ingredient groups of a recipe in render order
///
/// The first entry is always the unlabelled group, possibly empty.
#[must_use]
pub fn ingredient_sections(recipe: &Recipe) -> Vec<IngredientSection<'_>> {
    std::iter::once(IngredientSection {
        label: None,
        ingredients: recipe.unsectioned_ingredients(),
    })
    .chain(recipe.section_labels.iter().map(|label| IngredientSection {
        label: Some(label.as_str()),
        ingredients: recipe.ingredients_for_section(label),
    }))
    .collect()
}

/// Headings paired with formatted, scaled lines
#[must_use]
pub fn scaled_ingredient_lines(recipe: &Recipe, scale: f64) -> Vec<(Option<&str>, Vec<String>)> {
    ingredient_sections(recipe)
        .into_iter()
        .map(|section| {
            let lines = section.lines(scale);
            (section.label, lines)
        })
        .collect()
}
