//! Browse a static recipe collection by ingredient tags.
//!
//! The dataset is loaded once into an immutable [`DataContext`]; the page
//! location then routes to the home, search or recipe page, whose view model
//! is rendered into named mount points by a [`Renderer`].
//!
//! ```no_run
//! use recipe_browser::RecipeBrowser;
//!
//! # async fn run() -> Result<(), recipe_browser::BrowserError> {
//! let result = RecipeBrowser::builder()
//!     .base("https://example.com/recipes/")
//!     .location("search.html?ingredients=egg%2Cmilk")
//!     .build()
//!     .await?;
//! for (mount, html) in result.surface.rendered() {
//!     println!("{mount}: {html}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod detail;
pub mod error;
pub mod home;
pub mod loader;
pub mod model;
pub mod navigation;
pub mod pages;
pub mod render;
pub mod search;
pub mod selector;
pub mod tags;

pub use builder::{BrowseResult, RecipeBrowser, RecipeBrowserBuilder};
pub use config::BrowserConfig;
pub use context::DataContext;
pub use detail::DetailEvent;
pub use error::BrowserError;
pub use loader::DatasetLoader;
pub use model::Recipe;
pub use navigation::{Navigation, PageKind, PageLocation};
pub use pages::{init_page, PageOptions, PageView};
pub use render::{HtmlRenderer, Mount, Renderer, Surface};
pub use selector::{Key, SelectorEvent, TagSelector};

/// Load the dataset and render `location` with default settings
pub async fn browse(base: &str, location: &str) -> Result<BrowseResult, BrowserError> {
    RecipeBrowser::builder()
        .base(base)
        .location(location)
        .build()
        .await
}
