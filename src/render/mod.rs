mod html;
mod surface;

pub use html::HtmlRenderer;
pub use surface::{Mount, Surface};

use crate::detail::DetailView;
use crate::home::HomeView;
use crate::search::SearchView;
use crate::selector::TagSelector;

/// Turns page view models into mount point content.
///
/// Implementations write through [`Surface`], which drops writes to mounts
/// the page does not have.
pub trait Renderer {
    fn render_home(&self, view: &HomeView, surface: &mut Surface);

    /// Re-render only the selector parts of the home page (input, popup, chips)
    fn render_selector(&self, selector: &TagSelector, surface: &mut Surface);

    fn render_search(&self, view: &SearchView, surface: &mut Surface);

    fn render_detail(&self, view: &DetailView, surface: &mut Surface);
}
