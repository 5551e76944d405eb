use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::normalizer::NO_PLURAL_CHANGE;
use crate::providers::DEFAULT_BASE_URL;
use crate::suggest::{DEFAULT_COUNT, DEFAULT_POOL};

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Where favorites and preferences are kept
    #[serde(default)]
    pub storage: StorageConfig,
    /// Ingredient normalization settings
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    /// Random ingredient suggestions
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

/// Configuration for the recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Configuration for local persistence
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Directory holding the store file (defaults to the platform data directory)
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured directory, or `<platform data dir>/fridge2table`
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Configuration for ingredient normalization
#[derive(Debug, Deserialize, Clone)]
pub struct NormalizerConfig {
    /// Ingredients whose singular and plural are the same
    #[serde(default = "default_no_plural_change")]
    pub no_plural_change: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            no_plural_change: default_no_plural_change(),
        }
    }
}

/// Configuration for "surprise me" suggestions
#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionsConfig {
    /// Ingredients to pick from
    #[serde(default = "default_pool")]
    pub pool: Vec<String>,
    /// How many to pick
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            pool: default_pool(),
            count: default_count(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fridge2table")
}

fn default_no_plural_change() -> Vec<String> {
    NO_PLURAL_CHANGE.iter().map(|s| s.to_string()).collect()
}

fn default_pool() -> Vec<String> {
    DEFAULT_POOL.iter().map(|s| s.to_string()).collect()
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FRIDGE2TABLE__ prefix
    /// 2. fridge2table.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FRIDGE2TABLE__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("fridge2table").required(false))
        // Use double underscore for nested: FRIDGE2TABLE__API__TIMEOUT
        .add_source(
            Environment::with_prefix("FRIDGE2TABLE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
