use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::context::DataContext;
use crate::model::Recipe;
use crate::selector::TagSelector;

/// A recipe preview box in the home page carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselItem {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl From<&Recipe> for CarouselItem {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image.clone(),
            tags: recipe.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub carousel: Vec<CarouselItem>,
    pub selector: TagSelector,
}

/// Uniform random sample of up to `size` recipes
pub fn sample_carousel<R: Rng + ?Sized>(recipes: &[Recipe], size: usize, rng: &mut R) -> Vec<CarouselItem> {
    recipes
        .choose_multiple(rng, size)
        .map(CarouselItem::from)
        .collect()
}

pub fn init_home<R: Rng + ?Sized>(ctx: &DataContext, carousel_size: usize, rng: &mut R) -> HomeView {
    HomeView {
        carousel: sample_carousel(ctx.recipes(), carousel_size, rng),
        selector: TagSelector::new(ctx.unique_tags().to_vec()),
    }
}
