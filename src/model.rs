use serde::{Deserialize, Serialize};

/// A single recipe record as stored in the dataset document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub difficulty: String,
}

impl Recipe {
    /// Case-insensitive tag membership
    pub fn has_tag(&self, normalized: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == normalized)
    }

    /// True when the two recipes have at least one tag in common (case-insensitive)
    pub fn shares_tag_with(&self, other: &Recipe) -> bool {
        other.tags.iter().any(|t| self.has_tag(&t.to_lowercase()))
    }
}

/// Top-level shape of the dataset document: `{ "recipes": [...] }`
#[derive(Debug, Deserialize)]
pub struct RecipeDocument {
    pub recipes: Vec<Recipe>,
}

#[cfg(test)]
pub(crate) fn recipe(id: i64, name: &str, tags: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        image: format!("images/{id}.jpg"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ingredients: Vec::new(),
        steps: Vec::new(),
        prep_time: String::new(),
        cook_time: String::new(),
        servings: String::new(),
        difficulty: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "recipes": [{
                "id": 7,
                "name": "Pancakes",
                "image": "img/pancakes.jpg",
                "tags": ["Egg", "Flour", "Milk"],
                "ingredients": ["2 eggs", "1 cup flour"],
                "steps": ["Mix", "Fry"],
                "prepTime": "10 min",
                "cookTime": "15 min",
                "servings": "4",
                "difficulty": "Easy"
            }]
        }"#;

        let doc: RecipeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.recipes.len(), 1);
        let r = &doc.recipes[0];
        assert_eq!(r.prep_time, "10 min");
        assert_eq!(r.cook_time, "15 min");
        assert_eq!(r.steps, vec!["Mix", "Fry"]);
    }

    #[test]
    fn test_optional_display_fields_default_to_empty() {
        let json = r#"{"recipes": [{"id": 1, "name": "Toast", "tags": ["Bread"]}]}"#;
        let doc: RecipeDocument = serde_json::from_str(json).unwrap();
        assert!(doc.recipes[0].difficulty.is_empty());
        assert!(doc.recipes[0].ingredients.is_empty());
    }

    #[test]
    fn test_missing_recipes_field_is_an_error() {
        let result: Result<RecipeDocument, _> = serde_json::from_str(r#"{"items": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let r = recipe(1, "Pancakes", &["Flour", "Egg"]);
        assert!(r.has_tag("flour"));
        assert!(!r.has_tag("sugar"));
    }

    #[test]
    fn test_shares_tag_with() {
        let a = recipe(1, "A", &["Egg", "Flour"]);
        let b = recipe(2, "B", &["flour"]);
        let c = recipe(3, "C", &["Rice"]);
        assert!(a.shares_tag_with(&b));
        assert!(!a.shares_tag_with(&c));
    }
}
