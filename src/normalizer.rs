//! Ingredient term normalization.
//!
//! Maps what people type ("Tomato", "  Chicken ") onto the terms the recipe API
//! indexes. This is a small lookup, not an English pluralizer: anything outside
//! the exception set and the two known irregular plurals passes through as-is.

use std::collections::HashSet;

/// Ingredients whose singular and plural forms are identical
pub const NO_PLURAL_CHANGE: &[&str] = &[
    "fish", "beef", "tofu", "rice", "pork", "salmon", "shrimp", "bacon", "bread",
];

/// Irregular plurals the API expects in plural form
const IRREGULAR_PLURALS: &[(&str, &str)] = &[("potato", "potatoes"), ("tomato", "tomatoes")];

#[derive(Debug, Clone)]
pub struct Normalizer {
    no_plural_change: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NO_PLURAL_CHANGE.iter().copied())
    }
}

impl Normalizer {
    /// Create a normalizer with a custom exception set
    pub fn new<I, S>(no_plural_change: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            no_plural_change: no_plural_change
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn normalize(&self, term: &str) -> String {
        let lower = term.trim().to_lowercase();

        if self.no_plural_change.contains(&lower) {
            return lower;
        }

        IRREGULAR_PLURALS
            .iter()
            .find(|(singular, _)| *singular == lower)
            .map(|(_, plural)| plural.to_string())
            .unwrap_or(lower)
    }
}

/// Normalize a single term with the default exception set
pub fn normalize(term: &str) -> String {
    Normalizer::default().normalize(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(normalize("Tomato"), "tomatoes");
        assert_eq!(normalize("potato"), "potatoes");
        assert_eq!(normalize("tomatoes"), "tomatoes");
    }

    #[test]
    fn test_no_plural_change() {
        assert_eq!(normalize("fish"), "fish");
        assert_eq!(normalize("RICE "), "rice");
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(normalize("  Chicken  "), "chicken");
        assert_eq!(normalize("Garlic"), "garlic");
    }

    #[test]
    fn test_custom_exception_set() {
        // "potato" in the exception set wins over the irregular plural
        let normalizer = Normalizer::new(["Potato"]);
        assert_eq!(normalizer.normalize("potato"), "potato");
        assert_eq!(normalizer.normalize("tomato"), "tomatoes");
    }
}
