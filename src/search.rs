//! Ingredient search: a recipe matches when its tags contain every query tag.

use log::debug;
use serde::Serialize;

use crate::context::DataContext;
use crate::model::Recipe;
use crate::navigation::PageLocation;
use crate::tags::normalize_tag;

pub const INGREDIENTS_PARAM: &str = "ingredients";

/// Normalized, duplicate-free query tags in the order they were given
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    tags: Vec<String>,
}

impl SearchQuery {
    /// Split a comma-joined tag list and normalize each entry.
    ///
    /// Blank entries are kept: an empty tag matches no recipe.
    pub fn parse(raw: &str) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for tag in raw.split(',').map(normalize_tag) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self { tags }
    }

    /// Read the `ingredients` parameter. `None` when it is missing or empty.
    pub fn from_location(location: &PageLocation) -> Option<Self> {
        let raw = location.query_param(INGREDIENTS_PARAM)?;
        if raw.is_empty() {
            return None;
        }
        Some(Self::parse(&raw))
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.tags.iter().all(|tag| recipe.has_tag(tag))
    }

    /// Matching recipes in collection order
    pub fn filter<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

/// One entry in the results list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub id: i64,
    pub name: String,
    pub tags: Vec<String>,
}

impl From<&Recipe> for SearchResult {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            tags: recipe.tags.clone(),
        }
    }
}

/// Everything the search page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchView {
    pub query: SearchQuery,
    pub results: Vec<SearchResult>,
}

impl SearchView {
    pub fn no_results(&self) -> bool {
        self.results.is_empty()
    }
}

/// Build the search page view. `None` when the location carries no query.
pub fn init_search(ctx: &DataContext, location: &PageLocation) -> Option<SearchView> {
    let query = SearchQuery::from_location(location)?;
    let results: Vec<SearchResult> = query
        .filter(ctx.recipes())
        .into_iter()
        .map(SearchResult::from)
        .collect();
    debug!(
        "Search for {:?} matched {} of {} recipes",
        query.tags(),
        results.len(),
        ctx.recipes().len()
    );
    Some(SearchView { query, results })
}
