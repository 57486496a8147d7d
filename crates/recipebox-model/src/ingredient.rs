//! Ingredients, their recipe associations, and instruction steps
//!
//! Positions are optional sort keys. An absent position sorts exactly where
//! the legacy sentinel [`UNORDERED_POSITION`] would: after every smaller
//! explicit position and level with an explicit `999_999`.

use crate::ids::{IngredientId, InstructionId, RecipeIngredientId};
use serde::{Deserialize, Serialize};

/// Sort key used for entries without an explicit position
pub const UNORDERED_POSITION: i64 = 999_999;

/// Resolve an optional position to its sort key
#[inline]
#[must_use]
pub fn position_key(position: Option<i64>) -> i64 {
    position.unwrap_or(UNORDERED_POSITION)
}

/// A named foodstuff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identity, fixed at creation
    pub id: IngredientId,
    /// Free-text name, not deduplicated
    pub name: String,
}

impl Ingredient {
    /// Create an ingredient with a fresh identity
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: IngredientId::new(),
            name: name.into(),
        }
    }
}

/// An ingredient as used by one recipe
///
/// The [`Ingredient`] is embedded by value. Editing one recipe's entry never
/// affects another recipe that happens to use an ingredient of the same name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Identity of the association
    pub id: RecipeIngredientId,
    /// The ingredient itself
    pub ingredient: Ingredient,
    /// Amount, in `unit` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit or free-text measure ("Tbsp", "A handful of")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Preparation note ("minced", "or water")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Sort key within its section; `None` sorts last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Section the ingredient belongs to; `None` is the top-level group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_label: Option<String>,
}

impl RecipeIngredient {
    /// Associate an ingredient with no quantity, unit, note or section
    #[inline]
    #[must_use]
    pub fn new(ingredient: Ingredient) -> Self {
        Self {
            id: RecipeIngredientId::new(),
            ingredient,
            quantity: None,
            unit: None,
            note: None,
            position: None,
            section_label: None,
        }
    }

    /// Shorthand for `RecipeIngredient::new(Ingredient::new(name))`
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Ingredient::new(name))
    }

    /// With quantity
    #[inline]
    #[must_use]
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// With unit
    #[inline]
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// With note
    #[inline]
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// At explicit position
    #[inline]
    #[must_use]
    pub fn at_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// In named section
    #[inline]
    #[must_use]
    pub fn in_section(mut self, label: impl Into<String>) -> Self {
        self.section_label = Some(label.into());
        self
    }

    /// Ingredient name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.ingredient.name
    }

    /// Effective sort key
    #[inline]
    #[must_use]
    pub fn sort_key(&self) -> i64 {
        position_key(self.position)
    }

    /// Check whether this entry belongs to the given section
    #[inline]
    #[must_use]
    pub fn is_in_section(&self, label: &str) -> bool {
        self.section_label.as_deref() == Some(label)
    }
}

/// One step of a recipe's method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Identity
    pub id: InstructionId,
    /// Sort key; `None` sorts last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Step text
    pub instruction_text: String,
}

impl Instruction {
    /// Unpositioned step
    #[inline]
    #[must_use]
    pub fn new(instruction_text: impl Into<String>) -> Self {
        Self {
            id: InstructionId::new(),
            position: None,
            instruction_text: instruction_text.into(),
        }
    }

    /// Step at an explicit position
    #[inline]
    #[must_use]
    pub fn at(position: i64, instruction_text: impl Into<String>) -> Self {
        Self {
            position: Some(position),
            ..Self::new(instruction_text)
        }
    }

    /// Effective sort key
    #[inline]
    #[must_use]
    pub fn sort_key(&self) -> i64 {
        position_key(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_position_sorts_like_sentinel() {
        assert_eq!(position_key(None), UNORDERED_POSITION);
        assert_eq!(position_key(Some(3)), 3);

        let unpositioned = RecipeIngredient::named("salt");
        assert_eq!(unpositioned.sort_key(), 999_999);
        assert!(RecipeIngredient::named("oil").at_position(1_000_000).sort_key() > unpositioned.sort_key());
    }

    #[test]
    fn builder_sets_fields() {
        let ri = RecipeIngredient::named("garlic")
            .with_quantity(3.0)
            .with_unit("cloves")
            .with_note("minced")
            .at_position(2)
            .in_section("Chicken");

        assert_eq!(ri.name(), "garlic");
        assert_eq!(ri.quantity, Some(3.0));
        assert_eq!(ri.unit.as_deref(), Some("cloves"));
        assert_eq!(ri.note.as_deref(), Some("minced"));
        assert_eq!(ri.position, Some(2));
        assert!(ri.is_in_section("Chicken"));
        assert!(!ri.is_in_section("Sauce"));
    }

    #[test]
    fn same_name_ingredients_are_distinct() {
        let a = Ingredient::new("garlic");
        let b = Ingredient::new("garlic");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn embedded_ingredient_is_independent_copy() {
        let original = RecipeIngredient::named("garlic");
        let mut copy = original.clone();
        copy.ingredient.name = "black garlic".to_string();
        assert_eq!(original.name(), "garlic");
        assert_eq!(copy.name(), "black garlic");
    }

    #[test]
    fn instruction_constructors() {
        let step = Instruction::at(2, "Chop");
        assert_eq!(step.sort_key(), 2);
        assert_eq!(Instruction::new("Serve").sort_key(), UNORDERED_POSITION);
    }
}
