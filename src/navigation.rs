//! Page locations, query parameters and navigation intents.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use url::Url;

use crate::error::BrowserError;

pub const HOME_PAGE: &str = "index.html";
pub const SEARCH_PAGE: &str = "search.html";
pub const DETAIL_PAGE: &str = "recipe.html";

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Base used to resolve relative page locations that carry no base of their own
const LOCAL_BASE: &str = "http://localhost/";

/// Which page a location refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Search,
    Detail,
}

/// Where a UI interaction wants the browser to go next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "target", rename_all = "lowercase")]
pub enum Navigation {
    /// Load another page, relative to the current one
    Location(String),
    /// Go back one entry in history
    Back,
}

/// A parsed page location: path plus query
#[derive(Debug, Clone)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    /// Parse an absolute URL or a path relative to the site root
    pub fn parse(location: &str) -> Result<Self, BrowserError> {
        let url = match Url::parse(location) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(LOCAL_BASE)?.join(location)?,
            Err(e) => return Err(e.into()),
        };
        Ok(Self { url })
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// First value of a query parameter, percent-decoded
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Route by path suffix. Unrecognized paths map to no page.
    pub fn page_kind(&self) -> Option<PageKind> {
        let path = self.path();
        if path.is_empty() || path == "/" || path.ends_with(HOME_PAGE) {
            Some(PageKind::Home)
        } else if path.ends_with(SEARCH_PAGE) {
            Some(PageKind::Search)
        } else if path.ends_with(DETAIL_PAGE) {
            Some(PageKind::Detail)
        } else {
            None
        }
    }
}

/// `search.html?ingredients=<URI-component-encoded comma-joined tags>`
pub fn search_url<S: AsRef<str>>(tags: &[S]) -> String {
    let joined = tags
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{SEARCH_PAGE}?ingredients={}",
        utf8_percent_encode(&joined, URI_COMPONENT)
    )
}

/// `recipe.html?id=<id>`
pub fn detail_url(id: i64) -> String {
    format!("{DETAIL_PAGE}?id={id}")
}
