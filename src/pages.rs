use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::config::BrowserConfig;
use crate::context::DataContext;
use crate::detail::{init_detail, DetailView};
use crate::home::{init_home, HomeView};
use crate::navigation::{PageKind, PageLocation};
use crate::render::{Mount, Renderer, Surface};
use crate::search::{init_search, SearchView};

/// Per-page tunables
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub carousel_size: usize,
    pub related_limit: usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        BrowserConfig::default().into()
    }
}

impl From<BrowserConfig> for PageOptions {
    fn from(config: BrowserConfig) -> Self {
        Self {
            carousel_size: config.carousel_size,
            related_limit: config.related_limit,
        }
    }
}

/// The initialized state of whichever page the location routed to
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageView {
    Home(HomeView),
    Search(SearchView),
    Detail(DetailView),
}

impl PageView {
    pub fn kind(&self) -> PageKind {
        match self {
            PageView::Home(_) => PageKind::Home,
            PageView::Search(_) => PageKind::Search,
            PageView::Detail(_) => PageKind::Detail,
        }
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &R, surface: &mut Surface) {
        match self {
            PageView::Home(view) => renderer.render_home(view, surface),
            PageView::Search(view) => renderer.render_search(view, surface),
            PageView::Detail(view) => renderer.render_detail(view, surface),
        }
    }
}

/// Mount points the page markup for `kind` provides
pub fn page_surface(kind: PageKind) -> Surface {
    let mounts = match kind {
        PageKind::Home => Mount::HOME,
        PageKind::Search => Mount::SEARCH,
        PageKind::Detail => Mount::DETAIL,
    };
    Surface::with_mounts(mounts.iter().copied())
}

/// Route `location` to exactly one page initializer.
///
/// `None` for unrecognized paths and for search/detail pages whose query
/// parameters are missing or match nothing.
pub fn init_page<R: Rng + ?Sized>(
    ctx: &DataContext,
    location: &PageLocation,
    options: PageOptions,
    rng: &mut R,
) -> Option<PageView> {
    let Some(kind) = location.page_kind() else {
        debug!("No page registered for {}", location.path());
        return None;
    };

    match kind {
        PageKind::Home => Some(PageView::Home(init_home(ctx, options.carousel_size, rng))),
        PageKind::Search => init_search(ctx, location).map(PageView::Search),
        PageKind::Detail => init_detail(ctx, location, options.related_limit).map(PageView::Detail),
    }
}
