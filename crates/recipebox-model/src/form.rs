//! Editable form projection of a recipe
//!
//! [`FormData`] is a flat, string-and-primitive copy of the editable fields.
//! It holds no reference back to its recipe; changes are reconciled by
//! copying fields with [`Recipe::apply_form_data`].
//!
//! Empty strings stand for absent values in both directions, so clearing a
//! field in the form clears it on the recipe.

use crate::cuisine::Cuisine;
use crate::ids::RecipeId;
use crate::recipe::{MealCourse, Recipe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Editable fields of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    /// Id of the source recipe, or a fresh id for a new one
    pub id: RecipeId,
    /// Name
    pub name: String,
    /// Details, `""` when absent
    pub details: String,
    /// Credit, `""` when absent
    pub credit: String,
    /// Course
    pub meal_course: MealCourse,
    /// Thumbnail URL text, `""` when absent
    pub thumbnail_url: String,
    /// Last prepared time; only applied when `previously_prepared` is set
    pub last_prepared_at: DateTime<Utc>,
    /// Notes
    pub notes: String,
    /// Whether the recipe counts as prepared
    pub previously_prepared: bool,
}

impl FormData {
    /// Blank form, timestamped `now`
    #[must_use]
    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            id: RecipeId::new(),
            name: String::new(),
            details: String::new(),
            credit: String::new(),
            meal_course: MealCourse::Main,
            thumbnail_url: String::new(),
            last_prepared_at: now,
            notes: String::new(),
            previously_prepared: false,
        }
    }

    /// Blank form timestamped with the current time
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe {
    /// Project this recipe onto a form
    ///
    /// `now` stands in for a missing `last_prepared_at`.
    /// `previously_prepared` is left `false`; see [`Recipe::begin_edit_at`].
    #[must_use]
    pub fn to_form_data_at(&self, now: DateTime<Utc>) -> FormData {
        FormData {
            id: self.id,
            name: self.name.clone(),
            details: self.details.clone().unwrap_or_default(),
            credit: self.credit.clone().unwrap_or_default(),
            meal_course: self.meal_course,
            thumbnail_url: self
                .thumbnail_url
                .as_ref()
                .map(|url| url.as_str().to_string())
                .unwrap_or_default(),
            last_prepared_at: self.last_prepared_at.unwrap_or(now),
            notes: self.notes.clone(),
            previously_prepared: false,
        }
    }

    /// [`to_form_data_at`](Self::to_form_data_at) using the current time
    #[inline]
    #[must_use]
    pub fn to_form_data(&self) -> FormData {
        self.to_form_data_at(Utc::now())
    }

    /// Form for an editing session
    ///
    /// Same as the bare projection, with `previously_prepared` checked when
    /// the recipe has a last-prepared timestamp.
    #[must_use]
    pub fn begin_edit_at(&self, now: DateTime<Utc>) -> FormData {
        let mut form = self.to_form_data_at(now);
        if self.last_prepared_at.is_some() {
            form.previously_prepared = true;
        }
        form
    }

    /// [`begin_edit_at`](Self::begin_edit_at) using the current time
    #[inline]
    #[must_use]
    pub fn begin_edit(&self) -> FormData {
        self.begin_edit_at(Utc::now())
    }

    /// Build a new recipe from a form
    ///
    /// The form has no cuisine field, so new recipes start as
    /// [`Cuisine::American`]. The recipe gets a fresh id.
    #[must_use]
    pub fn from_form_data(form: &FormData) -> Self {
        let mut recipe = Recipe::new(form.name.clone(), Cuisine::American, form.meal_course)
            .with_notes(form.notes.clone());
        recipe.apply_form_data(form);
        recipe
    }

    /// Copy form fields onto this recipe
    ///
    /// An unchecked `previously_prepared` clears `last_prepared_at`, whatever
    /// it held before. An invalid thumbnail URL becomes `None`.
    pub fn apply_form_data(&mut self, form: &FormData) {
        self.name.clone_from(&form.name);
        self.details = non_empty(&form.details);
        self.credit = non_empty(&form.credit);
        self.meal_course = form.meal_course;
        self.thumbnail_url = parse_thumbnail(&form.thumbnail_url);
        self.last_prepared_at = form.previously_prepared.then_some(form.last_prepared_at);
        self.notes.clone_from(&form.notes);

        tracing::debug!(
            recipe_id = %self.id,
            prepared = self.is_prepared(),
            "applied form data"
        );
    }
}

/// Create a recipe from form data (see [`Recipe::from_form_data`])
#[inline]
#[must_use]
pub fn create_recipe(form: &FormData) -> Recipe {
    Recipe::from_form_data(form)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_thumbnail(raw: &str) -> Option<Url> {
    if raw.is_empty() {
        return None;
    }
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(thumbnail = raw, error = %err, "discarding invalid thumbnail url");
            None
        }
    }
}
