use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::favorites::FavoritesStore;
use crate::normalizer::Normalizer;
use crate::providers::{MealDbProvider, RecipeSource};
use crate::session::Session;
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

/// Where favorites and preferences are persisted
#[derive(Debug, Clone, Default)]
pub enum StorageMode {
    /// `store.json` in the configured (or platform default) data directory
    #[default]
    DataDir,
    /// `store.json` in a specific directory
    Dir(PathBuf),
    /// Nothing is written to disk
    InMemory,
}

/// Entry point for configuring a [`Session`]
pub struct Fridge2Table;

impl Fridge2Table {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }
}

/// Builder for configuring and creating a [`Session`]
#[derive(Default)]
pub struct SessionBuilder {
    config: AppConfig,
    storage: StorageMode,
    timeout: Option<Duration>,
    source: Option<Arc<dyn RecipeSource>>,
    store: Option<Box<dyn KeyValueStore>>,
}

impl SessionBuilder {
    /// Start from a loaded configuration instead of the defaults
    ///
    /// # Example
    /// ```
    /// use fridge2table::{AppConfig, Fridge2Table};
    ///
    /// let builder = Fridge2Table::builder().config(AppConfig::default());
    /// ```
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different API endpoint (mirror or test server)
    ///
    /// # Example
    /// ```
    /// use fridge2table::Fridge2Table;
    ///
    /// let builder = Fridge2Table::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api.base_url = url.into();
        self
    }

    /// Set a per-request timeout, overriding `api.timeout` from the configuration.
    /// A request that times out counts as a network error.
    ///
    /// # Example
    /// ```
    /// use fridge2table::Fridge2Table;
    /// use std::time::Duration;
    ///
    /// let builder = Fridge2Table::builder().timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Persist favorites in `dir` instead of the platform data directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage = StorageMode::Dir(dir.into());
        self
    }

    /// Keep favorites and preferences in memory only
    ///
    /// # Example
    /// ```
    /// use fridge2table::Fridge2Table;
    ///
    /// let builder = Fridge2Table::builder().in_memory();
    /// ```
    pub fn in_memory(mut self) -> Self {
        self.storage = StorageMode::InMemory;
        self
    }

    /// Use a custom key-value store for favorites and preferences
    pub fn store(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a custom recipe source instead of the HTTP API
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the list of ingredients that have no distinct plural
    pub fn no_plural_change<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.normalizer.no_plural_change = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Build the session
    pub fn build(self) -> Result<Session, AppError> {
        if self.config.suggestions.count == 0 {
            return Err(AppError::BuilderError(
                "suggestions.count must be at least 1".to_string(),
            ));
        }
        if self.config.suggestions.pool.iter().all(|s| s.trim().is_empty()) {
            return Err(AppError::BuilderError(
                "suggestions.pool must contain at least one ingredient".to_string(),
            ));
        }

        let timeout = self.timeout.unwrap_or_else(|| self.config.api.timeout());
        if timeout.is_zero() {
            return Err(AppError::BuilderError(
                "api.timeout must be greater than zero".to_string(),
            ));
        }

        let source: Arc<dyn RecipeSource> = match self.source {
            Some(source) => source,
            None => Arc::new(
                MealDbProvider::with_base_url(
                    self.config.api.base_url.clone(),
                    Some(timeout),
                )
                .map_err(|e| AppError::BuilderError(e.to_string()))?,
            ),
        };

        let store: Box<dyn KeyValueStore> = match (self.store, self.storage) {
            (Some(store), _) => store,
            (None, StorageMode::InMemory) => Box::new(MemoryStore::new()),
            (None, StorageMode::Dir(dir)) => Box::new(JsonFileStore::in_dir(dir)),
            (None, StorageMode::DataDir) => Box::new(JsonFileStore::in_dir(
                self.config.storage.resolve_data_dir(),
            )),
        };

        let normalizer = Normalizer::new(&self.config.normalizer.no_plural_change);
        let suggestions = self.config.suggestions;

        Ok(Session::new(source, FavoritesStore::load(store))
            .with_normalizer(normalizer)
            .with_suggestions(suggestions.pool, suggestions.count))
    }
}
