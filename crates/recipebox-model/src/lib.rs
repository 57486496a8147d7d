//! Recipe Box Model
//!
//! Typed recipe catalogue entities and the pure operations that derive
//! presentation views from them.
//!
//! # Core Concepts
//!
//! - [`Recipe`]: aggregate root owning ingredients, instructions and section labels
//! - [`RecipeIngredient`]: an [`Ingredient`] embedded by value with quantity, unit and position
//! - [`Cuisine`]: closed variant type with per-variant data
//! - [`FormData`]: flat editable projection, reconciled by field copy
//!
//! # Example
//!
//! ```rust
//! use recipebox_model::{format_ingredient_line, Cuisine, MealCourse, Recipe, RecipeIngredient};
//!
//! let recipe = Recipe::new("Fried Rice", Cuisine::chinese("Canton"), MealCourse::Main)
//!     .with_ingredients(vec![
//!         RecipeIngredient::named("oil").with_quantity(2.0).with_unit("Tbsp"),
//!     ]);
//!
//! let line = format_ingredient_line(recipe.unsectioned_ingredients()[0], 0.5);
//! assert_eq!(line, "1.0 Tbsp oil");
//! assert_eq!(recipe.cuisine.label(), "Chinese - Canton");
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod cuisine;
pub mod display;
pub mod error;
pub mod form;
pub mod ids;
pub mod ingredient;
pub mod recipe;
pub mod sections;

// Re-exports
pub use cuisine::{cuisine_label, Cuisine, ItalianWine};
pub use display::{format_ingredient_line, format_quantity, ScaleFactor};
pub use error::ParseError;
pub use form::{create_recipe, FormData};
pub use ids::{IngredientId, InstructionId, RecipeId, RecipeIngredientId};
pub use ingredient::{position_key, Ingredient, Instruction, RecipeIngredient, UNORDERED_POSITION};
pub use recipe::{filter_by_meal_course, MealCourse, Recipe};
pub use sections::{ingredient_sections, scaled_ingredient_lines, IngredientSection};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with recipes
    pub use crate::{
        Cuisine, FormData, Ingredient, Instruction, ItalianWine, MealCourse, Recipe, RecipeId,
        RecipeIngredient, ScaleFactor,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
