//! Multi-ingredient recipe search.
//!
//! The API can only list recipes for one ingredient at a time, so a search for
//! "chicken, rice" looks up every ingredient concurrently, keeps the recipe IDs
//! present in all of the listings, then re-reads the first ingredient's listing
//! to pick up names and thumbnails in the API's order.

use crate::error::SearchError;
use crate::model::Recipe;
use crate::normalizer::Normalizer;
use crate::providers::RecipeSource;
use futures::future::join_all;
use log::{debug, error, info};
use std::collections::HashSet;

/// Ingredients as the user typed them, paired with their normalized query terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    terms: Vec<String>,
    normalized: Vec<String>,
}

impl IngredientQuery {
    /// Split comma-separated input, dropping blank tokens
    pub fn parse(raw: &str, normalizer: &Normalizer) -> Result<Self, SearchError> {
        let terms: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        if terms.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let normalized = terms.iter().map(|t| normalizer.normalize(t)).collect();
        Ok(IngredientQuery { terms, normalized })
    }

    /// The user's original terms, in input order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Normalized terms, in input order (may contain duplicates)
    pub fn normalized(&self) -> &[String] {
        &self.normalized
    }

    /// Normalized terms with duplicates removed, first occurrence kept
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.normalized
            .iter()
            .map(String::as_str)
            .filter(|term| seen.insert(*term))
            .collect()
    }

    /// Term whose listing decides display order and fields
    pub fn primary(&self) -> &str {
        &self.normalized[0]
    }

    /// Human-readable summary, e.g. "chicken, Rice"
    pub fn display_text(&self) -> String {
        self.terms.join(", ")
    }
}

/// Result of a search that completed without a technical failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Recipes that use every ingredient, in the first ingredient's listing order
    Found(Vec<Recipe>),
    /// The query was valid but no recipe uses all of the ingredients
    NoCommonMatch,
}

impl SearchOutcome {
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            SearchOutcome::Found(recipes) => recipes,
            SearchOutcome::NoCommonMatch => &[],
        }
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        match self {
            SearchOutcome::Found(recipes) => recipes,
            SearchOutcome::NoCommonMatch => Vec::new(),
        }
    }
}

/// Search for recipes that use all of the comma-separated ingredients in `raw`
pub async fn search(
    source: &dyn RecipeSource,
    normalizer: &Normalizer,
    raw: &str,
) -> Result<SearchOutcome, SearchError> {
    let query = IngredientQuery::parse(raw, normalizer)?;
    search_query(source, &query).await
}

/// Run an already parsed query against `source`
pub async fn search_query(
    source: &dyn RecipeSource,
    query: &IngredientQuery,
) -> Result<SearchOutcome, SearchError> {
    let ingredients = query.distinct();
    debug!(
        "Searching {} for {} ingredient(s): {:?}",
        source.source_name(),
        ingredients.len(),
        ingredients
    );

    // All lookups settle before any result is looked at
    let lookups = ingredients
        .iter()
        .map(|ingredient| source.filter_by_ingredient(ingredient));
    let results = join_all(lookups).await;

    let mut id_sets: Vec<HashSet<String>> = Vec::with_capacity(results.len());
    for (ingredient, result) in ingredients.iter().zip(results) {
        match result {
            Ok(meals) => id_sets.push(meals.into_iter().map(|meal| meal.id).collect()),
            Err(e) => {
                error!("Lookup for '{}' failed: {}", ingredient, e);
                return Err(SearchError::network(ingredient, e));
            }
        }
    }

    if id_sets.iter().any(HashSet::is_empty) {
        debug!("At least one ingredient has no recipes");
        return Ok(SearchOutcome::NoCommonMatch);
    }

    let common = intersect(id_sets);
    debug!("{} recipe(s) share all ingredients", common.len());
    if common.is_empty() {
        return Ok(SearchOutcome::NoCommonMatch);
    }

    let primary = query.primary();
    let listing = source
        .filter_by_ingredient(primary)
        .await
        .map_err(|e| {
            error!("Listing for '{}' failed: {}", primary, e);
            SearchError::network(primary, e)
        })?;

    let recipes: Vec<Recipe> = listing
        .into_iter()
        .filter(|meal| common.contains(&meal.id))
        .map(|meal| Recipe::new(meal.id, meal.name, meal.thumbnail.unwrap_or_default()))
        .collect();

    if recipes.is_empty() {
        return Ok(SearchOutcome::NoCommonMatch);
    }

    info!(
        "Found {} recipe(s) for '{}'",
        recipes.len(),
        query.display_text()
    );
    Ok(SearchOutcome::Found(recipes))
}

/// Intersection of every set; the smallest set seeds it
fn intersect(mut sets: Vec<HashSet<String>>) -> HashSet<String> {
    sets.sort_by_key(HashSet::len);
    let mut iter = sets.into_iter();
    let Some(mut acc) = iter.next() else {
        return HashSet::new();
    };
    for set in iter {
        acc.retain(|id| set.contains(id));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_drops_blank_tokens() {
        let query = IngredientQuery::parse(" Chicken, , tomato ,", &Normalizer::default()).unwrap();
        assert_eq!(query.terms(), ["Chicken", "tomato"]);
        assert_eq!(query.normalized(), ["chicken", "tomatoes"]);
        assert_eq!(query.display_text(), "Chicken, tomato");
        assert_eq!(query.primary(), "chicken");
    }

    #[test]
    fn test_parse_empty_input() {
        let normalizer = Normalizer::default();
        assert!(matches!(
            IngredientQuery::parse("   ", &normalizer),
            Err(SearchError::EmptyQuery)
        ));
        assert!(matches!(
            IngredientQuery::parse(" , ,", &normalizer),
            Err(SearchError::EmptyQuery)
        ));
    }

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        let query =
            IngredientQuery::parse("Tomato, rice, tomatoes", &Normalizer::default()).unwrap();
        assert_eq!(query.distinct(), vec!["tomatoes", "rice"]);
    }

    #[test]
    fn test_intersect() {
        let common = intersect(vec![set(&["1", "2", "3"]), set(&["2", "3", "4"])]);
        assert_eq!(common, set(&["2", "3"]));

        let common = intersect(vec![set(&["1", "2"]), set(&["2"]), set(&["3"])]);
        assert!(common.is_empty());

        assert!(intersect(Vec::new()).is_empty());
    }

    #[test]
    fn test_outcome_recipes() {
        assert!(SearchOutcome::NoCommonMatch.recipes().is_empty());
        let found = SearchOutcome::Found(vec![Recipe::new("1", "Soup", "")]);
        assert_eq!(found.recipes().len(), 1);
        assert_eq!(found.into_recipes()[0].id, "1");
    }
}
