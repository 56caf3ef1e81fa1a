use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::BrowserConfig;
use crate::context::DataContext;
use crate::detail::DetailEvent;
use crate::loader::{base_url, resolve_dataset, DatasetLoader};
use crate::navigation::{Navigation, PageLocation};
use crate::pages::{init_page, page_surface, PageOptions, PageView};
use crate::render::{HtmlRenderer, Renderer, Surface};
use crate::selector::{Key, SelectorEvent};
use crate::BrowserError;

/// Result of loading and rendering one page
#[derive(Debug, Clone)]
pub struct BrowseResult {
    /// Number of recipes the dataset provided (0 when loading failed)
    pub recipe_count: usize,
    /// Initialized page, `None` when nothing was rendered
    pub page: Option<PageView>,
    /// Rendered mount points
    pub surface: Surface,
    /// Where the simulated selections or back press lead, if anywhere
    pub navigation: Option<Navigation>,
}

/// Builder for loading the dataset and rendering a page
#[derive(Debug, Default)]
pub struct RecipeBrowserBuilder {
    config: BrowserConfig,
    location: Option<String>,
    selections: Vec<String>,
    seed: Option<u64>,
    timeout: Option<Duration>,
    back: bool,
}

impl RecipeBrowserBuilder {
    /// Start from loaded configuration instead of defaults
    pub fn config(mut self, config: BrowserConfig) -> Self {
        self.config = config;
        self
    }

    /// Page location to render, e.g. `search.html?ingredients=egg`
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .location("recipe.html?id=3");
    /// ```
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Dataset location, relative to the base unless absolute
    pub fn dataset(mut self, dataset: impl Into<String>) -> Self {
        self.config.dataset = dataset.into();
        self
    }

    /// Base URL or directory that the dataset resolves against
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .base("https://example.com/recipes/")
    ///     .dataset("recipes.json");
    /// ```
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.config.base_url = Some(base.into());
        self
    }

    /// Set a timeout for the dataset request
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Select a tag in the home page selector before rendering
    pub fn select(mut self, tag: impl Into<String>) -> Self {
        self.selections.push(tag.into());
        self
    }

    /// Press the back control on the recipe page after rendering
    pub fn back(mut self) -> Self {
        self.back = true;
        self
    }

    /// Seed the carousel sampling for reproducible output
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Explicit timeout if set, otherwise the configured number of seconds. Zero is rejected.
    fn request_timeout(&self) -> Result<Duration, BrowserError> {
        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(self.config.timeout));
        if timeout.is_zero() {
            return Err(BrowserError::BuilderError(
                "dataset timeout must be greater than zero".to_string(),
            ));
        }
        Ok(timeout)
    }

    fn dataset_url(&self) -> Result<url::Url, BrowserError> {
        let base = match &self.config.base_url {
            Some(base) => base_url(base)?,
            None => url::Url::from_directory_path(std::env::current_dir()?).map_err(|_| {
                BrowserError::BuilderError("current directory cannot be used as a base".to_string())
            })?,
        };
        resolve_dataset(&base, &self.config.dataset)
    }

    /// Load the dataset, route the location and render it as HTML
    pub async fn build(self) -> Result<BrowseResult, BrowserError> {
        self.build_with(&HtmlRenderer).await
    }

    /// Same as [`build`](Self::build) with a custom renderer
    pub async fn build_with<R: Renderer + ?Sized>(self, renderer: &R) -> Result<BrowseResult, BrowserError> {
        let location = PageLocation::parse(self.location.as_deref().unwrap_or("index.html"))?;
        let dataset = self.dataset_url()?;

        let loader = DatasetLoader::new(self.request_timeout()?)?;
        // Pages only initialize once the fetch has settled
        let ctx = DataContext::new(loader.load_or_empty(&dataset).await);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let options = PageOptions::from(self.config.clone());
        let mut page = init_page(&ctx, &location, options, &mut rng);

        let mut surface = match &page {
            Some(p) => page_surface(p.kind()),
            None => Surface::new(),
        };
        if let Some(p) = &page {
            p.render(renderer, &mut surface);
        }

        let mut navigation = None;
        match page.as_mut() {
            Some(PageView::Home(home)) if !self.selections.is_empty() => {
                for tag in self.selections {
                    debug!("Selecting '{}'", tag);
                    home.selector.handle(SelectorEvent::CandidateSelected(tag));
                }
                navigation = home.selector.handle(SelectorEvent::KeySubmitted(Key::Enter));
                renderer.render_selector(&home.selector, &mut surface);
            }
            Some(PageView::Detail(detail)) if self.back => {
                navigation = detail.handle(DetailEvent::BackClicked);
            }
            _ => {}
        }

        Ok(BrowseResult {
            recipe_count: ctx.recipes().len(),
            page,
            surface,
            navigation,
        })
    }
}

/// Entry point for the builder API
pub struct RecipeBrowser;

impl RecipeBrowser {
    pub fn builder() -> RecipeBrowserBuilder {
        RecipeBrowserBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_settings() {
        let builder = RecipeBrowser::builder()
            .location("search.html?ingredients=egg")
            .dataset("data.json")
            .base("https://example.com/")
            .timeout(Duration::from_secs(4))
            .select("Egg")
            .seed(9);

        assert_eq!(builder.location.as_deref(), Some("search.html?ingredients=egg"));
        assert_eq!(builder.request_timeout().unwrap(), Duration::from_secs(4));
        assert_eq!(builder.selections, vec!["Egg"]);
        assert_eq!(
            builder.dataset_url().unwrap().as_str(),
            "https://example.com/data.json"
        );
    }

    #[test]
    fn test_sub_second_timeout_is_kept() {
        let builder = RecipeBrowser::builder().timeout(Duration::from_millis(500));
        assert_eq!(builder.request_timeout().unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let builder = RecipeBrowser::builder().timeout(Duration::ZERO);
        assert!(matches!(
            builder.request_timeout(),
            Err(BrowserError::BuilderError(_))
        ));

        let config = BrowserConfig {
            timeout: 0,
            ..BrowserConfig::default()
        };
        let builder = RecipeBrowser::builder().config(config);
        assert!(builder.request_timeout().is_err());
    }
}
