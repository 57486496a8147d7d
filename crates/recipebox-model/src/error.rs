//! Error types for the recipe model
//!
//! The model operations themselves never fail: missing optional fields are
//! represented as absence and malformed form input is coerced. The only
//! fallible surface is parsing picker values from text.

/// Errors raised when parsing model enums from strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Unknown meal course name
    #[error("unknown meal course: {0} (expected appetizer, main, side or dessert)")]
    UnknownMealCourse(String),

    /// Unknown Italian wine name
    #[error("unknown wine: {0} (expected barolo, brunello or taurisi)")]
    UnknownWine(String),

    /// Scale factor outside the offered choices
    #[error("unsupported scale factor: {0} (expected 0.5, 1 or 2)")]
    UnsupportedScale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError::UnknownMealCourse("brunch".to_string());
        assert!(err.to_string().contains("unknown meal course: brunch"));

        let err = ParseError::UnsupportedScale("3".to_string());
        assert!(err.to_string().contains("0.5, 1 or 2"));
    }
}
