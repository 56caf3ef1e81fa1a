use log::debug;
use serde::Serialize;

use crate::context::DataContext;
use crate::model::Recipe;
use crate::navigation::{detail_url, search_url, Navigation, PageLocation};

pub const ID_PARAM: &str = "id";

/// Short reference to another recipe, used for the related panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeLink {
    pub id: i64,
    pub name: String,
    pub image: String,
}

impl From<&Recipe> for RecipeLink {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image.clone(),
        }
    }
}

/// Everything the detail page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub recipe: Recipe,
    pub related: Vec<RecipeLink>,
}

/// Clicks the detail page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    TagClicked(String),
    RelatedClicked(i64),
    BackClicked,
}

impl DetailView {
    pub fn handle(&self, event: DetailEvent) -> Option<Navigation> {
        match event {
            DetailEvent::TagClicked(tag) => Some(Navigation::Location(search_url(&[tag]))),
            DetailEvent::RelatedClicked(id) => self
                .related
                .iter()
                .any(|r| r.id == id)
                .then(|| Navigation::Location(detail_url(id))),
            DetailEvent::BackClicked => Some(Navigation::Back),
        }
    }
}

/// Recipes other than `recipe` sharing at least one tag with it, in collection order
pub fn related_recipes<'a>(recipes: &'a [Recipe], recipe: &Recipe, limit: usize) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|other| other.id != recipe.id && other.shares_tag_with(recipe))
        .take(limit)
        .collect()
}

/// Leading integer of `raw`, ignoring whatever follows it: `12abc` and `12.0` are both 12
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse().ok()
}

/// Build the detail page view. `None` when `id` is missing, has no leading integer or is unknown.
pub fn init_detail(ctx: &DataContext, location: &PageLocation, related_limit: usize) -> Option<DetailView> {
    let id = parse_id(&location.query_param(ID_PARAM)?)?;
    let Some(recipe) = ctx.find(id) else {
        debug!("No recipe with id {}", id);
        return None;
    };

    let related = related_recipes(ctx.recipes(), recipe, related_limit)
        .into_iter()
        .map(RecipeLink::from)
        .collect();

    Some(DetailView {
        recipe: recipe.clone(),
        related,
    })
}
