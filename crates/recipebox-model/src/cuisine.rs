//! Cuisine classification
//!
//! [`Cuisine`] is a closed sum type. Every consumer matches it exhaustively,
//! so adding a variant is a compile error until each display and storage
//! site handles it.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cuisine of a recipe, with per-variant data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cuisine {
    /// American
    American,
    /// Chinese, from a named region
    Chinese {
        /// Regional style, e.g. "Sichuan"
        region: String,
    },
    /// Japanese
    Japanese,
    /// Italian, with a suggested wine
    Italian {
        /// Wine to serve alongside
        wine_pairing: ItalianWine,
    },
}

impl Cuisine {
    /// Chinese cuisine of the given region
    #[inline]
    #[must_use]
    pub fn chinese(region: impl Into<String>) -> Self {
        Self::Chinese {
            region: region.into(),
        }
    }

    /// Italian cuisine paired with the given wine
    #[inline]
    #[must_use]
    pub fn italian(wine_pairing: ItalianWine) -> Self {
        Self::Italian { wine_pairing }
    }

    /// Human-readable label, e.g. `"Chinese - Sichuan"`
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Cuisine::American => "American".to_string(),
            Cuisine::Chinese { region } => format!("Chinese - {region}"),
            Cuisine::Japanese => "Japanese".to_string(),
            Cuisine::Italian { wine_pairing } => format!("Italian, pair with {wine_pairing}"),
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Free-function form of [`Cuisine::label`] for rendering code
#[inline]
#[must_use]
pub fn cuisine_label(cuisine: &Cuisine) -> String {
    cuisine.label()
}

/// Wines offered as Italian pairings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItalianWine {
    /// Barolo
    Barolo,
    /// Brunello
    Brunello,
    /// Taurisi
    Taurisi,
}

impl ItalianWine {
    /// All wines in declaration order
    pub const ALL: [ItalianWine; 3] = [Self::Barolo, Self::Brunello, Self::Taurisi];

    /// Lowercase name as shown in the cuisine label
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ItalianWine::Barolo => "barolo",
            ItalianWine::Brunello => "brunello",
            ItalianWine::Taurisi => "taurisi",
        }
    }
}

impl fmt::Display for ItalianWine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItalianWine {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|wine| wine.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownWine(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_for_every_variant() {
        assert_eq!(cuisine_label(&Cuisine::American), "American");
        assert_eq!(cuisine_label(&Cuisine::chinese("Sichuan")), "Chinese - Sichuan");
        assert_eq!(cuisine_label(&Cuisine::Japanese), "Japanese");
        assert_eq!(
            cuisine_label(&Cuisine::italian(ItalianWine::Taurisi)),
            "Italian, pair with taurisi"
        );
    }

    #[test]
    fn region_is_interpolated_verbatim() {
        assert_eq!(Cuisine::chinese("").label(), "Chinese - ");
        assert_eq!(Cuisine::chinese("Hunan ").label(), "Chinese - Hunan ");
    }

    #[test]
    fn wine_parses_case_insensitively() {
        assert_eq!("Barolo".parse::<ItalianWine>().unwrap(), ItalianWine::Barolo);
        assert_eq!(" brunello".parse::<ItalianWine>().unwrap(), ItalianWine::Brunello);
        assert!(matches!(
            "chianti".parse::<ItalianWine>(),
            Err(ParseError::UnknownWine(_))
        ));
    }

    #[test]
    fn cuisine_serializes_tagged() {
        let json = serde_json::to_value(Cuisine::italian(ItalianWine::Barolo)).unwrap();
        assert_eq!(json["kind"], "italian");
        assert_eq!(json["wine_pairing"], "barolo");

        let back: Cuisine =
            serde_json::from_str(r#"{"kind":"chinese","region":"Sichuan"}"#).unwrap();
        assert_eq!(back, Cuisine::chinese("Sichuan"));
    }
}
