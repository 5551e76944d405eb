use crate::error::ProviderError;
use crate::providers::{MealRecord, MealSummary, RecipeSource};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `{"meals": ...}` wrapper used by every endpoint
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Value>,
}

impl MealsEnvelope {
    /// The API answers "no results" with `null`, and for some lookups with a string.
    /// A list is parsed strictly: one bad entry fails the whole response.
    fn into_meals<T: DeserializeOwned>(self) -> Result<Vec<T>, ProviderError> {
        match self.meals {
            None | Some(Value::Null) | Some(Value::String(_)) => Ok(Vec::new()),
            Some(list @ Value::Array(_)) => {
                serde_json::from_value(list).map_err(|e| ProviderError::Malformed(e.to_string()))
            }
            Some(other) => Err(ProviderError::Malformed(format!(
                "unexpected meals value: {}",
                other
            ))),
        }
    }
}

/// HTTP client for TheMealDB's public JSON API
pub struct MealDbProvider {
    client: Client,
    base_url: String,
}

impl MealDbProvider {
    /// Create a provider for the public API with the default timeout
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(DEFAULT_BASE_URL, Some(DEFAULT_TIMEOUT))
    }

    /// Create a provider against a custom endpoint (mirrors, test servers)
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(concat!("fridge2table/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(MealDbProvider {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        value: &str,
    ) -> Result<Vec<T>, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}?i={}", url, value);

        let response = self.client.get(&url).query(&[("i", value)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope =
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;
        envelope.into_meals()
    }
}

#[async_trait]
impl RecipeSource for MealDbProvider {
    fn source_name(&self) -> &str {
        "themealdb"
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, ProviderError> {
        self.get_meals("filter.php", ingredient).await
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealRecord>, ProviderError> {
        let meals: Vec<MealRecord> = self.get_meals("lookup.php", id).await?;
        Ok(meals.into_iter().next())
    }
}
