use thiserror::Error;

/// Errors raised by a [`RecipeSource`](crate::providers::RecipeSource) implementation
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request could not be sent or the connection failed (includes timeouts)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status
    #[error("API responded with status {0}")]
    Status(u16),

    /// The response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ProviderError {
    /// HTTP status code, when the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status(code) => Some(*code),
            ProviderError::Transport(e) => e.status().map(|s| s.as_u16()),
            ProviderError::Malformed(_) => None,
        }
    }
}

/// Errors that can occur while searching recipes by ingredients
#[derive(Error, Debug)]
pub enum SearchError {
    /// No usable ingredient tokens after splitting the input
    #[error("Try adding at least one ingredient (separated by commas)")]
    EmptyQuery,

    /// A lookup for one of the ingredients failed; the whole search is aborted
    #[error("Lookup for '{ingredient}' failed: {message}")]
    Network {
        ingredient: String,
        status: Option<u16>,
        message: String,
    },
}

impl SearchError {
    pub(crate) fn network(ingredient: &str, err: ProviderError) -> Self {
        SearchError::Network {
            ingredient: ingredient.to_string(),
            status: err.status(),
            message: err.to_string(),
        }
    }
}

/// Errors that can occur while loading a single recipe's details
#[derive(Error, Debug)]
pub enum DetailError {
    /// The API has no record for this ID
    #[error("No recipe found with id {0}")]
    NotFound(String),

    /// Transport failure or non-success status
    #[error("Detail lookup failed: {message}")]
    Network {
        status: Option<u16>,
        message: String,
    },
}

impl From<ProviderError> for DetailError {
    fn from(err: ProviderError) -> Self {
        DetailError::Network {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

/// Errors from the key-value persistence layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be (de)serialized
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Top-level error for building a session and driving it from the CLI
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Detail(#[from] DetailError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_carried_into_search_error() {
        let err = SearchError::network("chicken", ProviderError::Status(503));
        match err {
            SearchError::Network {
                ingredient, status, ..
            } => {
                assert_eq!(ingredient, "chicken");
                assert_eq!(status, Some(503));
            }
            SearchError::EmptyQuery => panic!("Expected network error"),
        }
    }

    #[test]
    fn test_malformed_has_no_status() {
        let err: DetailError = ProviderError::Malformed("bad json".to_string()).into();
        assert!(matches!(err, DetailError::Network { status: None, .. }));
    }
}
