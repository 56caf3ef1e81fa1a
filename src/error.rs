use thiserror::Error;

/// Errors that can occur while loading the dataset or preparing a page
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to fetch the dataset over HTTP (network error, timeout or non-success status)
    #[error("Failed to fetch dataset: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Failed to read the dataset from disk
    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    /// The dataset is not valid JSON or lacks the `recipes` field
    #[error("Failed to parse dataset: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A page or dataset location could not be resolved
    #[error("Invalid location: {0}")]
    LocationError(#[from] url::ParseError),

    /// The resolved dataset location uses a scheme we cannot fetch from
    #[error("Unsupported dataset scheme: {0}")]
    UnsupportedScheme(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
