//! Ingredient line formatting and scale options
//!
//! Scaling is display-only: it never touches stored quantities.

use crate::error::ParseError;
use crate::ingredient::RecipeIngredient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scale choices offered to the reader
///
/// [`format_ingredient_line`] takes any `f64`; this enum only captures what
/// the picker offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScaleFactor {
    /// Half quantities
    #[serde(rename = "0.5")]
    Half,
    /// As written
    #[default]
    #[serde(rename = "1")]
    Whole,
    /// Doubled
    #[serde(rename = "2")]
    Double,
}

impl ScaleFactor {
    /// Choices in picker order
    pub const ALL: [ScaleFactor; 3] = [Self::Half, Self::Whole, Self::Double];

    /// Multiplier
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            ScaleFactor::Half => 0.5,
            ScaleFactor::Whole => 1.0,
            ScaleFactor::Double => 2.0,
        }
    }

    /// Picker caption
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScaleFactor::Half => "0.5",
            ScaleFactor::Whole => "1",
            ScaleFactor::Double => "2",
        }
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleFactor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0.5" | ".5" => Ok(Self::Half),
            "1" | "1.0" => Ok(Self::Whole),
            "2" | "2.0" => Ok(Self::Double),
            other => Err(ParseError::UnsupportedScale(other.to_string())),
        }
    }
}

impl From<ScaleFactor> for f64 {
    fn from(scale: ScaleFactor) -> Self {
        scale.value()
    }
}

/// Render a quantity the way the ingredient list shows it
///
/// Whole numbers keep one fractional digit (`2.0`); other values use the
/// shortest decimal that round-trips (`0.75`). Magnitudes of `1e16` and
/// above, or below `1e-4`, switch to exponent form with a signed, two-digit
/// exponent (`1e+16`, `1.5e-05`). No rounding is applied.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        return exponent_form(value);
    }
    if value.fract() == 0.0 {
        // Integral floats print without a fraction by default
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

const EXPONENT_ABOVE: f64 = 1e16;
const EXPONENT_BELOW: f64 = 1e-4;

fn exponent_form(value: f64) -> String {
    let shortest = format!("{value:e}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Format one ingredient line, scaling its quantity
///
/// Produces `"{quantity*scale} {unit} {name}"`, omitting the quantity and
/// unit parts when absent. The note is not part of the line.
#[must_use]
pub fn format_ingredient_line(ingredient: &RecipeIngredient, scale: f64) -> String {
    let quantity = ingredient
        .quantity
        .map(|quantity| format_quantity(quantity * scale));
    quantity
        .as_deref()
        .into_iter()
        .chain(ingredient.unit.as_deref())
        .chain(std::iter::once(ingredient.name()))
        .collect::<Vec<_>>()
        .join(" ")
}
