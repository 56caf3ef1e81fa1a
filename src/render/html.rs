use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{Mount, Renderer, Surface};
use crate::detail::DetailView;
use crate::home::{CarouselItem, HomeView};
use crate::navigation::{detail_url, search_url};
use crate::search::SearchView;
use crate::selector::{Popup, TagSelector};
use crate::tags::tag_color;

pub const NO_RESULTS: &str = "No Results Found";

/// Renders pages as HTML fragments, one per mount point
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

fn tag_chip(tag: &str) -> String {
    format!(
        r#"<span class="tag" style="background:{}">{}</span>"#,
        tag_color(tag),
        encode_text(tag)
    )
}

fn tag_chips(tags: &[String]) -> String {
    tags.iter().map(|t| tag_chip(t)).collect()
}

fn carousel_box(item: &CarouselItem) -> String {
    format!(
        r#"<a class="recipe-box" href="{href}"><img src="{src}" alt="{alt}"><h3>{name}</h3><div class="tags">{tags}</div></a>"#,
        href = encode_double_quoted_attribute(&detail_url(item.id)),
        src = encode_double_quoted_attribute(&item.image),
        alt = encode_double_quoted_attribute(&item.name),
        name = encode_text(&item.name),
        tags = tag_chips(&item.tags),
    )
}

impl Renderer for HtmlRenderer {
    fn render_home(&self, view: &HomeView, surface: &mut Surface) {
        self.render_selector(&view.selector, surface);

        let boxes: String = view.carousel.iter().map(carousel_box).collect();
        // rendered twice so the scroll animation can wrap around
        surface.set(Mount::Carousel, format!("{boxes}{boxes}"));
    }

    fn render_selector(&self, selector: &TagSelector, surface: &mut Surface) {
        surface.set(
            Mount::TagInput,
            format!(
                r#"<input class="input" type="text" value="{}">"#,
                encode_double_quoted_attribute(selector.input())
            ),
        );

        let popup = match selector.popup() {
            Popup::Idle => String::new(),
            Popup::Suggesting(candidates) => candidates
                .iter()
                .map(|t| {
                    format!(
                        r#"<div class="tag" style="background:{}" data-event="select" data-tag="{}">{}</div>"#,
                        tag_color(t),
                        encode_double_quoted_attribute(t),
                        encode_text(t)
                    )
                })
                .collect(),
        };
        surface.set(Mount::TagPopup, popup);

        let chips: String = selector
            .selected()
            .iter()
            .map(|t| {
                format!(
                    r#"<span class="tag" style="background:{}">{}<span class="remove" data-event="remove" data-tag="{}"> x</span></span>"#,
                    tag_color(t),
                    encode_text(t),
                    encode_double_quoted_attribute(t)
                )
            })
            .collect();
        surface.set(Mount::TagsContainer, chips);
    }

    fn render_search(&self, view: &SearchView, surface: &mut Surface) {
        let query_chips: Vec<String> = view.query.tags().iter().map(|t| tag_chip(t)).collect();
        surface.set(Mount::SearchTags, query_chips.join(" "));

        if view.no_results() {
            surface.set(
                Mount::SearchResults,
                format!(r#"<div class="no-results">{NO_RESULTS}</div>"#),
            );
            return;
        }

        let results: String = view
            .results
            .iter()
            .map(|r| {
                format!(
                    r#"<a class="result-box" href="{}"><h3>{}</h3><p>Ingredients: {}</p></a>"#,
                    encode_double_quoted_attribute(&detail_url(r.id)),
                    encode_text(&r.name),
                    encode_text(&r.tags.join(", "))
                )
            })
            .collect();
        surface.set(Mount::SearchResults, results);
    }

    fn render_detail(&self, view: &DetailView, surface: &mut Surface) {
        let recipe = &view.recipe;

        surface.set(
            Mount::RecipeImage,
            format!(
                r#"<img class="recipe-image" src="{}" alt="{}">"#,
                encode_double_quoted_attribute(&recipe.image),
                encode_double_quoted_attribute(&recipe.name)
            ),
        );
        surface.set(Mount::RecipeName, encode_text(&recipe.name));

        let meta: String = [
            ("prep-time", "Prep", &recipe.prep_time),
            ("cook-time", "Cook", &recipe.cook_time),
            ("servings", "Servings", &recipe.servings),
            ("difficulty", "Difficulty", &recipe.difficulty),
        ]
        .iter()
        .filter(|(_, _, value)| !value.is_empty())
        .map(|(class, label, value)| {
            format!(r#"<span class="{class}">{label}: {}</span>"#, encode_text(value))
        })
        .collect();
        surface.set(Mount::RecipeMeta, meta);

        let tags: String = recipe
            .tags
            .iter()
            .map(|t| {
                format!(
                    r#"<a class="tag" style="background:{}" href="{}">{}</a>"#,
                    tag_color(t),
                    encode_double_quoted_attribute(&search_url(&[t])),
                    encode_text(t)
                )
            })
            .collect();
        surface.set(Mount::RecipeTags, tags);

        let list_items = |items: &[String]| -> String {
            items
                .iter()
                .map(|i| format!("<li>{}</li>", encode_text(i)))
                .collect()
        };
        surface.set(Mount::IngredientList, list_items(&recipe.ingredients));
        surface.set(Mount::StepsList, list_items(&recipe.steps));

        let related: String = view
            .related
            .iter()
            .map(|r| {
                format!(
                    r#"<a class="related-box" href="{}"><img src="{}" alt="{}"><h4>{}</h4></a>"#,
                    encode_double_quoted_attribute(&detail_url(r.id)),
                    encode_double_quoted_attribute(&r.image),
                    encode_double_quoted_attribute(&r.name),
                    encode_text(&r.name)
                )
            })
            .collect();
        surface.set(Mount::RelatedRecipes, related);

        surface.set(
            Mount::BackControl,
            r#"<a class="back-button" data-nav="back" href="javascript:history.back()">Back</a>"#,
        );
    }
}
