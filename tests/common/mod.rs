#![allow(dead_code)]

use async_trait::async_trait;
use fridge2table::error::ProviderError;
use fridge2table::providers::{MealRecord, MealSummary, RecipeSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn listing_body(meals: &[(&str, &str)]) -> String {
    let meals: Vec<serde_json::Value> = meals
        .iter()
        .map(|(id, name)| {
            serde_json::json!({
                "idMeal": id,
                "strMeal": name,
                "strMealThumb": format!("https://img.example/{}.jpg", id)
            })
        })
        .collect();
    serde_json::json!({ "meals": meals }).to_string()
}

pub fn summary(id: &str, name: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: Some(format!("https://img.example/{}.jpg", id)),
    }
}

/// In-process recipe source with optional per-ingredient latency
#[derive(Default)]
pub struct FakeSource {
    listings: HashMap<String, (Duration, Vec<MealSummary>)>,
    failing: HashMap<String, u16>,
    records: HashMap<String, MealRecord>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(mut self, ingredient: &str, meals: Vec<MealSummary>) -> Self {
        self.listings
            .insert(ingredient.to_string(), (Duration::ZERO, meals));
        self
    }

    pub fn slow_listing(mut self, ingredient: &str, delay: Duration, meals: Vec<MealSummary>) -> Self {
        self.listings.insert(ingredient.to_string(), (delay, meals));
        self
    }

    pub fn failing(mut self, ingredient: &str, status: u16) -> Self {
        self.failing.insert(ingredient.to_string(), status);
        self
    }

    pub fn record(mut self, record: MealRecord) -> Self {
        self.records.insert(record.id.clone(), record);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeSource for FakeSource {
    fn source_name(&self) -> &str {
        "fake"
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(ingredient.to_string());

        if let Some(status) = self.failing.get(ingredient) {
            return Err(ProviderError::Status(*status));
        }
        match self.listings.get(ingredient) {
            Some((delay, meals)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                Ok(meals.clone())
            }
            None => Ok(Vec::new()),
        }
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealRecord>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.get(id).cloned())
    }
}
