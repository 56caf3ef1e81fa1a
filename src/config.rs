use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for loading and rendering pages
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Dataset location, relative to the base location unless absolute
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Base location pages and the dataset resolve against (URL or directory).
    /// The current directory when unset.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Dataset request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of recipes sampled into the home page carousel
    #[serde(default = "default_carousel_size")]
    pub carousel_size: usize,
    /// Maximum related recipes on the detail page
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            base_url: None,
            timeout: default_timeout(),
            carousel_size: default_carousel_size(),
            related_limit: default_related_limit(),
        }
    }
}

// Default value functions
fn default_dataset() -> String {
    "recipes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_carousel_size() -> usize {
    5
}

fn default_related_limit() -> usize {
    3
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BROWSER__ prefix
    /// 2. recipe-browser.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BROWSER__CAROUSEL_SIZE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`BrowserConfig::load`] for the source priority.
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-browser").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_BROWSER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
