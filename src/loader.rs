//! One-shot dataset loading.
//!
//! The dataset location is resolved against the page's base location and
//! fetched once. Callers that want the page to keep working without data use
//! [`DatasetLoader::load_or_empty`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use url::Url;

use crate::error::BrowserError;
use crate::model::{Recipe, RecipeDocument};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeBrowser/0.1)";

/// Retrieves the raw dataset document
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    async fn fetch(&self, location: &Url) -> Result<String, BrowserError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, BrowserError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DatasetFetcher for HttpFetcher {
    async fn fetch(&self, location: &Url) -> Result<String, BrowserError> {
        let response = self
            .client
            .get(location.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

pub struct FileFetcher;

#[async_trait]
impl DatasetFetcher for FileFetcher {
    async fn fetch(&self, location: &Url) -> Result<String, BrowserError> {
        let path = location
            .to_file_path()
            .map_err(|_| BrowserError::UnsupportedScheme(location.to_string()))?;
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

/// Resolve `dataset` against `base`. Absolute URLs are used as they are.
pub fn resolve_dataset(base: &Url, dataset: &str) -> Result<Url, BrowserError> {
    Ok(base.join(dataset)?)
}

/// Turn a directory path or URL string into a base URL that relative locations can join onto
pub fn base_url(base: &str) -> Result<Url, BrowserError> {
    match Url::parse(base) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = std::path::absolute(base)?;
            Url::from_directory_path(&path)
                .map_err(|_| BrowserError::UnsupportedScheme(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse a dataset document into its recipes
pub fn parse_dataset(body: &str) -> Result<Vec<Recipe>, BrowserError> {
    let document: RecipeDocument = serde_json::from_str(body)?;
    Ok(document.recipes)
}

pub struct DatasetLoader {
    http: HttpFetcher,
    file: FileFetcher,
}

impl DatasetLoader {
    pub fn new(timeout: Duration) -> Result<Self, BrowserError> {
        Ok(Self {
            http: HttpFetcher::new(timeout)?,
            file: FileFetcher,
        })
    }

    fn fetcher_for(&self, location: &Url) -> Result<&dyn DatasetFetcher, BrowserError> {
        match location.scheme() {
            "http" | "https" => Ok(&self.http),
            "file" => Ok(&self.file),
            other => Err(BrowserError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Fetch and parse the dataset at `location`
    pub async fn load(&self, location: &Url) -> Result<Vec<Recipe>, BrowserError> {
        debug!("Fetching dataset from {}", location);
        let body = self.fetcher_for(location)?.fetch(location).await?;
        let recipes = parse_dataset(&body)?;
        info!("Loaded {} recipes from {}", recipes.len(), location);
        Ok(recipes)
    }

    /// Like [`load`](Self::load), but any failure is logged and yields an empty collection
    pub async fn load_or_empty(&self, location: &Url) -> Vec<Recipe> {
        match self.load(location).await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!("Failed to load recipes from {}: {}", location, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_to_page_directory() {
        let base = Url::parse("https://example.com/site/index.html").unwrap();
        let url = resolve_dataset(&base, "recipes.json").unwrap();
        assert_eq!(url.as_str(), "https://example.com/site/recipes.json");
    }

    #[test]
    fn test_resolve_absolute_dataset() {
        let base = Url::parse("https://example.com/site/").unwrap();
        let url = resolve_dataset(&base, "https://cdn.example.org/r.json").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.org/r.json");
    }

    #[test]
    fn test_base_url_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let base = base_url(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(base.scheme(), "file");
        assert!(base.path().ends_with('/'));
    }

    #[test]
    fn test_parse_dataset_errors() {
        assert!(parse_dataset("not json").is_err());
        assert!(parse_dataset(r#"{"other": []}"#).is_err());
        assert!(parse_dataset(r#"{"recipes": []}"#).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_scheme_degrades_to_empty() {
        let loader = DatasetLoader::new(Duration::from_secs(1)).unwrap();
        let url = Url::parse("ftp://example.com/recipes.json").unwrap();
        assert!(matches!(
            loader.load(&url).await,
            Err(BrowserError::UnsupportedScheme(_))
        ));
        assert!(loader.load_or_empty(&url).await.is_empty());
    }
}
