use serde::{Deserialize, Serialize};
use std::fmt;

/// Prep time assumed when a recipe has no name to estimate from
const UNNAMED_MINUTES: u32 = 25;
const BASE_MINUTES: u32 = 15;
const MAX_EXTRA_MINUTES: u32 = 20;
/// Recipes at or under this many minutes count as quick meals
pub const QUICK_MEAL_MINUTES: u32 = 20;

/// Rough prep-time estimate inferred from the length of a recipe's name.
///
/// The API has no prep time, so this is only a stand-in:
/// `15 + min(20, floor(chars / 3))`, or 25 for an empty name.
pub fn estimate_minutes(name: &str) -> u32 {
    if name.is_empty() {
        return UNNAMED_MINUTES;
    }
    let extra = (name.chars().count() / 3) as u32;
    BASE_MINUTES + extra.min(MAX_EXTRA_MINUTES)
}

pub fn is_quick_meal(minutes: u32) -> bool {
    minutes <= QUICK_MEAL_MINUTES
}

/// A recipe card produced by an ingredient search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub minutes: u32,
    pub is_quick: bool,
}

impl Recipe {
    /// Build a recipe, deriving the time estimate from its name
    pub fn new(id: impl Into<String>, name: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        let name = name.into();
        let minutes = estimate_minutes(&name);
        Recipe {
            id: id.into(),
            name,
            thumbnail: thumbnail.into(),
            minutes,
            is_quick: is_quick_meal(minutes),
        }
    }
}

/// One ingredient slot of a full recipe record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measure: Option<String>,
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measure {
            Some(measure) => write!(f, "{} – {}", self.ingredient, measure),
            None => write!(f, "{}", self.ingredient),
        }
    }
}

/// Display-ready form of a full recipe record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    /// Area and category joined with " · ", if either is known
    pub subtitle: Option<String>,
    pub thumbnail: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: String,
    pub source_url: Option<String>,
    pub minutes: u32,
    pub is_quick: bool,
}
