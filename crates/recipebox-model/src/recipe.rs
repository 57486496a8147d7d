//! The recipe aggregate
//!
//! A [`Recipe`] owns its ingredient and instruction lists by value. Ingredients
//! keep insertion order; instructions are sorted by position once, when the
//! list is handed to the recipe, and stored that way.

use crate::cuisine::Cuisine;
use crate::error::ParseError;
use crate::ids::RecipeId;
use crate::ingredient::{Instruction, RecipeIngredient};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Course a recipe is served as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCourse {
    /// Appetizer
    Appetizer,
    /// Main course
    #[default]
    Main,
    /// Side dish
    Side,
    /// Dessert
    Dessert,
}

impl MealCourse {
    /// All courses in picker order
    pub const ALL: [MealCourse; 4] = [Self::Appetizer, Self::Main, Self::Side, Self::Dessert];

    /// Raw lowercase value
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MealCourse::Appetizer => "appetizer",
            MealCourse::Main => "main",
            MealCourse::Side => "side",
            MealCourse::Dessert => "dessert",
        }
    }

    /// Uppercase caption used in list rows
    #[inline]
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for MealCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCourse {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownMealCourse(s.to_string()))
    }
}

/// Recipe aggregate root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identity, stable for the recipe's lifetime
    pub id: RecipeId,
    /// Display name (not validated)
    pub name: String,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Attribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    /// Thumbnail image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<Url>,
    /// Cuisine classification
    pub cuisine: Cuisine,
    /// Course
    pub meal_course: MealCourse,
    /// Ingredients in insertion order
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default, deserialize_with = "sorted_instructions")]
    instructions: Vec<Instruction>,
    /// Section display order; not checked against ingredient labels
    #[serde(default)]
    pub section_labels: Vec<String>,
    /// When the recipe was last prepared; `None` means never
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_prepared_at: Option<DateTime<Utc>>,
    /// Free-form notes, empty by default
    #[serde(default)]
    pub notes: String,
}

impl Recipe {
    /// Create a recipe with no ingredients, instructions or sections
    #[must_use]
    pub fn new(name: impl Into<String>, cuisine: Cuisine, meal_course: MealCourse) -> Self {
        Self {
            id: RecipeId::new(),
            name: name.into(),
            details: None,
            credit: None,
            thumbnail_url: None,
            cuisine,
            meal_course,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            section_labels: Vec::new(),
            last_prepared_at: None,
            notes: String::new(),
        }
    }

    /// With details
    #[inline]
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// With credit
    #[inline]
    #[must_use]
    pub fn with_credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = Some(credit.into());
        self
    }

    /// With thumbnail
    #[inline]
    #[must_use]
    pub fn with_thumbnail(mut self, url: Url) -> Self {
        self.thumbnail_url = Some(url);
        self
    }

    /// With ingredients, kept in the given order
    #[inline]
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<RecipeIngredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// With instructions, stored sorted by position
    #[inline]
    #[must_use]
    pub fn with_instructions(mut self, instructions: Vec<Instruction>) -> Self {
        self.set_instructions(instructions);
        self
    }

    /// With section display order
    #[inline]
    #[must_use]
    pub fn with_section_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// With last-prepared timestamp
    #[inline]
    #[must_use]
    pub fn with_last_prepared_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_prepared_at = Some(at);
        self
    }

    /// With notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Instructions, ascending by position
    #[inline]
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Replace the instruction list, sorting it by position
    pub fn set_instructions(&mut self, mut instructions: Vec<Instruction>) {
        sort_instructions(&mut instructions);
        self.instructions = instructions;
    }

    /// Ingredients without a section label, in insertion order
    #[must_use]
    pub fn unsectioned_ingredients(&self) -> Vec<&RecipeIngredient> {
        self.ingredients
            .iter()
            .filter(|ri| ri.section_label.is_none())
            .collect()
    }

    /// Ingredients labelled `label`, ascending by position
    ///
    /// Equal positions keep their relative order from the ingredient list.
    #[must_use]
    pub fn ingredients_for_section(&self, label: &str) -> Vec<&RecipeIngredient> {
        let mut section: Vec<_> = self
            .ingredients
            .iter()
            .filter(|ri| ri.is_in_section(label))
            .collect();
        // sort_by_key is stable
        section.sort_by_key(|ri| ri.sort_key());
        section
    }

    /// Whether the recipe has been prepared
    #[inline]
    #[must_use]
    pub fn is_prepared(&self) -> bool {
        self.last_prepared_at.is_some()
    }

    /// Flip the prepared flag
    ///
    /// Sets the timestamp to `now` when never prepared, otherwise clears it.
    /// The previous timestamp is discarded either way.
    pub fn toggle_prepared(&mut self, now: DateTime<Utc>) {
        self.last_prepared_at = match self.last_prepared_at {
            None => Some(now),
            Some(_) => None,
        };
        tracing::debug!(
            recipe_id = %self.id,
            prepared = self.is_prepared(),
            "toggled prepared state"
        );
    }

    /// [`toggle_prepared`](Self::toggle_prepared) at the current time
    #[inline]
    pub fn toggle_prepared_now(&mut self) {
        self.toggle_prepared(Utc::now());
    }
}

/// Recipes served as `course`, in input order
#[must_use]
pub fn filter_by_meal_course(course: MealCourse, recipes: &[Recipe]) -> Vec<&Recipe> {
    recipes.iter().filter(|r| r.meal_course == course).collect()
}

fn sort_instructions(instructions: &mut [Instruction]) {
    instructions.sort_by_key(Instruction::sort_key);
}

fn sorted_instructions<'de, D>(deserializer: D) -> Result<Vec<Instruction>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut instructions = Vec::<Instruction>::deserialize(deserializer)?;
    sort_instructions(&mut instructions);
    Ok(instructions)
}
