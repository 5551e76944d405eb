pub mod builder;
pub mod config;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod model;
pub mod normalizer;
pub mod preferences;
pub mod providers;
pub mod search;
pub mod session;
pub mod state;
pub mod storage;
pub mod suggest;
pub mod uniffi_bindings;
pub mod view;

// Re-export commonly used types
pub use builder::{Fridge2Table, SessionBuilder, StorageMode};
pub use config::AppConfig;
pub use error::{AppError, DetailError, ProviderError, SearchError, StoreError};
pub use model::{estimate_minutes, is_quick_meal, IngredientLine, Recipe, RecipeDetail};
pub use normalizer::{normalize, Normalizer};
pub use providers::{MealDbProvider, RecipeSource};
pub use search::{IngredientQuery, SearchOutcome};
pub use session::{Intent, Session, StateListener};
pub use state::{AppState, DetailView, Status, StatusKind, Summary, ViewContent};
pub use view::{compute_visible, SortMode, ViewOptions};

/// Search TheMealDB for recipes using all of the comma-separated ingredients
///
/// # Example
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = fridge2table::search_recipes("chicken, rice").await?;
/// for recipe in outcome.recipes() {
///     println!("{} ({} min)", recipe.name, recipe.minutes);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(ingredients: &str) -> Result<SearchOutcome, AppError> {
    let provider = MealDbProvider::new().map_err(|e| AppError::BuilderError(e.to_string()))?;
    Ok(search::search(&provider, &Normalizer::default(), ingredients).await?)
}

/// Load one recipe's full details from TheMealDB
pub async fn recipe_detail(id: &str) -> Result<RecipeDetail, AppError> {
    let provider = MealDbProvider::new().map_err(|e| AppError::BuilderError(e.to_string()))?;
    Ok(detail::fetch_detail(&provider, id, &[]).await?)
}
