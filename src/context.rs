use crate::model::Recipe;
use crate::tags::unique_tags;

/// Immutable view of the loaded dataset, built once after the fetch settles
/// and handed to every page initializer.
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    recipes: Vec<Recipe>,
    unique_tags: Vec<String>,
}

impl DataContext {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let unique_tags = unique_tags(&recipes);
        Self {
            recipes,
            unique_tags,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn unique_tags(&self) -> &[String] {
        &self.unique_tags
    }

    pub fn find(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
