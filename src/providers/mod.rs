mod themealdb;

pub use themealdb::{MealDbProvider, DEFAULT_BASE_URL};

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Number of numbered ingredient/measure slots in a full record
pub const INGREDIENT_SLOTS: usize = 20;

/// Entry from the "recipes containing ingredient X" listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Empty when the listing has no name; estimated as an unnamed recipe
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Full recipe record returned by the lookup-by-id endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    /// Remaining fields, including `strIngredientN` / `strMeasureN`
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl MealRecord {
    /// Raw ingredient text for a 1-based slot, if present
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slot_text("strIngredient", slot)
    }

    /// Raw measure text for a 1-based slot, if present
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.slot_text("strMeasure", slot)
    }

    fn slot_text(&self, prefix: &str, slot: usize) -> Option<&str> {
        self.extra
            .get(&format!("{}{}", prefix, slot))
            .and_then(Value::as_str)
    }
}

/// Read-only access to an external recipe database
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Name used in log output
    fn source_name(&self) -> &str;

    /// List recipes that contain the given (already normalized) ingredient
    async fn filter_by_ingredient(&self, ingredient: &str)
        -> Result<Vec<MealSummary>, ProviderError>;

    /// Look up one full recipe record; `Ok(None)` when the ID is unknown
    async fn lookup(&self, id: &str) -> Result<Option<MealRecord>, ProviderError>;
}
