use recipe_browser::tags::tag_color;
use recipe_browser::{Mount, Navigation, PageKind, RecipeBrowser};
use scraper::{Html, Selector};
use tempfile::TempDir;

fn write_dataset() -> TempDir {
    let recipes: Vec<serde_json::Value> = (1..=8)
        .map(|id| {
            let tags = match id % 4 {
                0 => vec!["Flour", "Egg", "Milk"],
                1 => vec!["Egg", "Cheese"],
                2 => vec!["Flour", "Sugar", "Butter"],
                _ => vec!["Rice"],
            };
            serde_json::json!({
                "id": id,
                "name": format!("Recipe {id}"),
                "image": format!("images/{id}.jpg"),
                "tags": tags,
                "ingredients": ["one thing", "another thing"],
                "steps": ["first", "second", "third"],
                "prepTime": "10 min",
                "cookTime": "15 min",
                "servings": "2",
                "difficulty": "Easy"
            })
        })
        .collect();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("recipes.json"),
        serde_json::json!({ "recipes": recipes }).to_string(),
    )
    .unwrap();
    dir
}

fn base(dir: &TempDir) -> String {
    dir.path().to_str().unwrap().to_string()
}

fn select_all(fragment: &str, css: &str) -> usize {
    let html = Html::parse_fragment(fragment);
    let selector = Selector::parse(css).unwrap();
    html.select(&selector).count()
}

#[tokio::test]
async fn test_home_page_renders_carousel_twice() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("index.html")
        .seed(42)
        .build()
        .await
        .unwrap();

    assert_eq!(result.recipe_count, 8);
    assert_eq!(result.page.as_ref().map(|p| p.kind()), Some(PageKind::Home));

    let carousel = result.surface.content(Mount::Carousel).unwrap();
    assert_eq!(select_all(carousel, "a.recipe-box"), 10);
    assert!(result.navigation.is_none());
}

#[tokio::test]
async fn test_home_selections_navigate_to_search() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("index.html")
        .select("egg")
        .select("milk")
        .select("egg")
        .build()
        .await
        .unwrap();

    assert_eq!(
        result.navigation,
        Some(Navigation::Location(
            "search.html?ingredients=egg%2Cmilk".to_string()
        ))
    );
    let chips = result.surface.content(Mount::TagsContainer).unwrap();
    assert_eq!(select_all(chips, "span.remove"), 2);
}

#[tokio::test]
async fn test_search_page_subset_match() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("search.html?ingredients=FLOUR%2C%20egg")
        .build()
        .await
        .unwrap();

    let results = result.surface.content(Mount::SearchResults).unwrap();
    // ids 4 and 8 carry Flour, Egg and Milk
    assert_eq!(select_all(results, "a.result-box"), 2);
    assert!(results.contains("recipe.html?id=4"));
    assert!(results.contains("recipe.html?id=8"));

    let query = result.surface.content(Mount::SearchTags).unwrap();
    assert!(query.contains(&format!("background:{}", tag_color("flour"))));
}

#[tokio::test]
async fn test_search_page_no_results() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("search.html?ingredients=flour,saffron")
        .build()
        .await
        .unwrap();

    let results = result.surface.content(Mount::SearchResults).unwrap();
    assert_eq!(select_all(results, "div.no-results"), 1);
    assert_eq!(select_all(results, "a.result-box"), 0);
}

#[tokio::test]
async fn test_search_page_blank_entry_shows_placeholder() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("search.html?ingredients=%2C")
        .build()
        .await
        .unwrap();

    let results = result.surface.content(Mount::SearchResults).unwrap();
    assert_eq!(select_all(results, "div.no-results"), 1);
    assert_eq!(select_all(results, "a.result-box"), 0);
}

#[tokio::test]
async fn test_search_page_without_query_renders_nothing() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("search.html")
        .build()
        .await
        .unwrap();

    assert!(result.page.is_none());
    assert_eq!(result.surface.rendered().count(), 0);
}

#[tokio::test]
async fn test_detail_page() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("recipe.html?id=4")
        .build()
        .await
        .unwrap();

    let surface = &result.surface;
    assert_eq!(surface.content(Mount::RecipeName), Some("Recipe 4"));
    assert_eq!(select_all(surface.content(Mount::StepsList).unwrap(), "li"), 3);
    assert_eq!(select_all(surface.content(Mount::IngredientList).unwrap(), "li"), 2);

    let tags = surface.content(Mount::RecipeTags).unwrap();
    assert!(tags.contains(r#"href="search.html?ingredients=Flour""#));
    assert!(tags.contains(&format!("background:{}", tag_color("Flour"))));

    // 1 and 5 share Egg, 2 shares Flour; 8 is past the limit
    let related = surface.content(Mount::RelatedRecipes).unwrap();
    assert_eq!(select_all(related, "a.related-box"), 3);
    assert!(!related.contains("recipe.html?id=4\""));
    assert!(related.contains("recipe.html?id=1"));
    assert!(related.contains("recipe.html?id=2"));
    assert!(related.contains("recipe.html?id=5"));

    assert!(surface.content(Mount::BackControl).unwrap().contains("data-nav=\"back\""));
}

#[tokio::test]
async fn test_detail_page_back_control() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("recipe.html?id=4")
        .back()
        .build()
        .await
        .unwrap();

    assert_eq!(result.navigation, Some(Navigation::Back));
}

#[tokio::test]
async fn test_detail_page_unknown_id() {
    let dir = write_dataset();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("recipe.html?id=9999")
        .build()
        .await
        .unwrap();

    assert!(result.page.is_none());
    assert_eq!(result.surface.rendered().count(), 0);
}

#[tokio::test]
async fn test_missing_dataset_still_renders_home() {
    let dir = tempfile::tempdir().unwrap();
    let result = RecipeBrowser::builder()
        .base(base(&dir))
        .location("/")
        .build()
        .await
        .unwrap();

    assert_eq!(result.recipe_count, 0);
    assert_eq!(result.page.as_ref().map(|p| p.kind()), Some(PageKind::Home));
    assert!(result.surface.content(Mount::TagInput).is_some());
}
