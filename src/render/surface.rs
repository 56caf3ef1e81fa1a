use std::collections::BTreeMap;
use std::fmt;

/// Named anchor points a page can render into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mount {
    TagsContainer,
    TagInput,
    TagPopup,
    Carousel,
    SearchTags,
    SearchResults,
    RecipeImage,
    RecipeName,
    RecipeMeta,
    RecipeTags,
    IngredientList,
    StepsList,
    RelatedRecipes,
    BackControl,
}

impl Mount {
    /// CSS class the mount is found under in the page markup
    pub fn selector(&self) -> &'static str {
        match self {
            Mount::TagsContainer => "tags-container",
            Mount::TagInput => "input",
            Mount::TagPopup => "tag-popup",
            Mount::Carousel => "carousel",
            Mount::SearchTags => "search-tags",
            Mount::SearchResults => "search-results",
            Mount::RecipeImage => "recipe-image",
            Mount::RecipeName => "recipe-name",
            Mount::RecipeMeta => "recipe-meta",
            Mount::RecipeTags => "tags-horizontal",
            Mount::IngredientList => "ingredient-list",
            Mount::StepsList => "steps-list",
            Mount::RelatedRecipes => "related-recipes",
            Mount::BackControl => "back-button",
        }
    }

    pub const HOME: &'static [Mount] = &[
        Mount::TagsContainer,
        Mount::TagInput,
        Mount::TagPopup,
        Mount::Carousel,
    ];

    pub const SEARCH: &'static [Mount] = &[Mount::SearchTags, Mount::SearchResults];

    pub const DETAIL: &'static [Mount] = &[
        Mount::RecipeImage,
        Mount::RecipeName,
        Mount::RecipeMeta,
        Mount::RecipeTags,
        Mount::IngredientList,
        Mount::StepsList,
        Mount::RelatedRecipes,
        Mount::BackControl,
    ];
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// The set of mount points present on a page and what has been rendered into them.
///
/// Writes to a mount that is not present are silently dropped, so renderers
/// never have to check for presence themselves.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    mounts: BTreeMap<Mount, String>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mounts<I: IntoIterator<Item = Mount>>(mounts: I) -> Self {
        Self {
            mounts: mounts.into_iter().map(|m| (m, String::new())).collect(),
        }
    }

    /// Every mount point any page uses
    pub fn full() -> Self {
        Self::with_mounts(
            Mount::HOME
                .iter()
                .chain(Mount::SEARCH)
                .chain(Mount::DETAIL)
                .copied(),
        )
    }

    pub fn is_present(&self, mount: Mount) -> bool {
        self.mounts.contains_key(&mount)
    }

    /// Replace the content of `mount`. Returns false when the mount is absent.
    pub fn set(&mut self, mount: Mount, content: impl Into<String>) -> bool {
        match self.mounts.get_mut(&mount) {
            Some(slot) => {
                *slot = content.into();
                true
            }
            None => false,
        }
    }

    /// Append to the content of `mount`. Returns false when the mount is absent.
    pub fn append(&mut self, mount: Mount, content: &str) -> bool {
        match self.mounts.get_mut(&mount) {
            Some(slot) => {
                slot.push_str(content);
                true
            }
            None => false,
        }
    }

    pub fn content(&self, mount: Mount) -> Option<&str> {
        self.mounts.get(&mount).map(String::as_str)
    }

    /// Present mounts with non-empty content, in declaration order
    pub fn rendered(&self) -> impl Iterator<Item = (Mount, &str)> {
        self.mounts
            .iter()
            .filter(|(_, content)| !content.is_empty())
            .map(|(mount, content)| (*mount, content.as_str()))
    }
}
