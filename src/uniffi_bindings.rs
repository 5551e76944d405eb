//! UniFFI bindings for fridge2table
//!
//! This module provides FFI-compatible types and functions for native hosts
//! (iOS, Android). It wraps the async Rust API with synchronous functions that
//! manage their own tokio runtime; the host renders the plain records it gets back.

use std::fmt;
use std::time::Duration;

use crate::providers::MealDbProvider;
use crate::{
    DetailError, Normalizer, Recipe, RecipeDetail, SearchError, SearchOutcome, SortMode,
    ViewOptions,
};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe card
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub minutes: u32,
    pub is_quick: bool,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            name: recipe.name,
            thumbnail: recipe.thumbnail,
            minutes: recipe.minutes,
            is_quick: recipe.is_quick,
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            id: ffi.id,
            name: ffi.name,
            thumbnail: ffi.thumbnail,
            minutes: ffi.minutes,
            is_quick: ffi.is_quick,
        }
    }
}

/// FFI-compatible recipe details
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDetail {
    pub id: String,
    pub name: String,
    /// Empty string if neither area nor category is known
    pub subtitle: String,
    /// Display lines such as "Rice – 1 cup"
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub source_url: Option<String>,
    pub minutes: u32,
    pub is_quick: bool,
}

impl From<RecipeDetail> for FfiRecipeDetail {
    fn from(detail: RecipeDetail) -> Self {
        FfiRecipeDetail {
            ingredients: detail.ingredients.iter().map(ToString::to_string).collect(),
            id: detail.id,
            name: detail.name,
            subtitle: detail.subtitle.unwrap_or_default(),
            instructions: detail.instructions,
            source_url: detail.source_url,
            minutes: detail.minutes,
            is_quick: detail.is_quick,
        }
    }
}

/// FFI-compatible sort mode
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiSortMode {
    Default,
    NameAz,
    NameZa,
    TimeAsc,
    TimeDesc,
}

impl From<FfiSortMode> for SortMode {
    fn from(mode: FfiSortMode) -> Self {
        match mode {
            FfiSortMode::Default => SortMode::Default,
            FfiSortMode::NameAz => SortMode::NameAz,
            FfiSortMode::NameZa => SortMode::NameZa,
            FfiSortMode::TimeAsc => SortMode::TimeAsc,
            FfiSortMode::TimeDesc => SortMode::TimeDesc,
        }
    }
}

/// FFI-compatible search result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiSearchOutcome {
    /// Recipes that use every ingredient
    Found { recipes: Vec<FfiRecipe> },
    /// Valid search, but nothing uses all of the ingredients
    NoCommonMatch,
}

impl From<SearchOutcome> for FfiSearchOutcome {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(recipes) => FfiSearchOutcome::Found {
                recipes: recipes.into_iter().map(Into::into).collect(),
            },
            SearchOutcome::NoCommonMatch => FfiSearchOutcome::NoCommonMatch,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiError {
    /// No usable ingredients in the input
    EmptyQuery { message: String },
    /// Transport failure or non-success status from the API
    NetworkError { message: String },
    /// Detail lookup found no recipe with that ID
    NotFound { message: String },
    /// Runtime error (tokio) or client setup failure
    RuntimeError { message: String },
}

impl fmt::Display for FfiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiError::EmptyQuery { message } => write!(f, "Empty query: {}", message),
            FfiError::NetworkError { message } => write!(f, "Network error: {}", message),
            FfiError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiError {}

impl From<SearchError> for FfiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::EmptyQuery => FfiError::EmptyQuery {
                message: err.to_string(),
            },
            SearchError::Network { .. } => FfiError::NetworkError {
                message: err.to_string(),
            },
        }
    }
}

impl From<DetailError> for FfiError {
    fn from(err: DetailError) -> Self {
        match err {
            DetailError::NotFound(_) => FfiError::NotFound {
                message: err.to_string(),
            },
            DetailError::Network { .. } => FfiError::NetworkError {
                message: err.to_string(),
            },
        }
    }
}

/// Configuration for API calls made through the bindings
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearchConfig {
    /// Optional API base URL (uses the public API if not specified)
    pub base_url: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn create_provider(config: Option<FfiSearchConfig>) -> Result<MealDbProvider, FfiError> {
    let config = config.unwrap_or_default();
    let timeout = config.timeout_seconds.map(Duration::from_secs);
    let provider = match config.base_url {
        Some(url) => MealDbProvider::with_base_url(url, timeout),
        None => MealDbProvider::with_base_url(crate::providers::DEFAULT_BASE_URL, timeout),
    };
    provider.map_err(|e| FfiError::RuntimeError {
        message: e.to_string(),
    })
}

/// Search recipes that use all of the comma-separated ingredients
///
/// # Arguments
/// * `ingredients` - e.g. "chicken, rice"
/// * `config` - Optional endpoint and timeout
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    ingredients: String,
    config: Option<FfiSearchConfig>,
) -> Result<FfiSearchOutcome, FfiError> {
    let provider = create_provider(config)?;
    let rt = create_runtime()?;
    let outcome =
        rt.block_on(crate::search::search(&provider, &Normalizer::default(), &ingredients))?;
    Ok(outcome.into())
}

/// Load one recipe's full details
///
/// # Arguments
/// * `id` - Recipe ID from a search result
/// * `known` - Recipes from the last search, so the time estimate matches the card
/// * `config` - Optional endpoint and timeout
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn fetch_recipe_detail(
    id: String,
    known: Vec<FfiRecipe>,
    config: Option<FfiSearchConfig>,
) -> Result<FfiRecipeDetail, FfiError> {
    let provider = create_provider(config)?;
    let known: Vec<Recipe> = known.into_iter().map(Into::into).collect();
    let rt = create_runtime()?;
    let detail = rt.block_on(crate::detail::fetch_detail(&provider, &id, &known))?;
    Ok(detail.into())
}

/// Filter and sort search results for display
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn visible_recipes(
    recipes: Vec<FfiRecipe>,
    sort: FfiSortMode,
    quick_only: bool,
    favorites_only: bool,
    favorites: Vec<String>,
) -> Vec<FfiRecipe> {
    let recipes: Vec<Recipe> = recipes.into_iter().map(Into::into).collect();
    let options = ViewOptions {
        sort: sort.into(),
        quick_only,
        favorites_only,
    };
    let favorites = favorites.into_iter().collect();
    crate::view::compute_visible(&recipes, &options, &favorites)
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Normalize one ingredient term the way searches do
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_ingredient(term: String) -> String {
    crate::normalizer::normalize(&term)
}

/// Estimated minutes for a recipe name
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn estimate_minutes(name: String) -> u32 {
    crate::model::estimate_minutes(&name)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
