//! Tag index and tag coloring.
//!
//! Tags are stored as authored but compared in lowercase. Colors come from a
//! fixed pastel palette so the same tag looks the same on every page.

use std::collections::BTreeSet;

use crate::model::Recipe;

/// Pastel palette used for tag chips
pub const PALETTE: [&str; 10] = [
    "#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF", "#E0BBE4", "#FEC8D8", "#D4F0F0",
    "#FFF1C1", "#C9C9FF",
];

/// Trim and lowercase a tag for comparison
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Sorted, deduplicated union of every recipe's tags
pub fn unique_tags(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .flat_map(|r| r.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Rolling hash over UTF-16 code units, `hash * 31 + code` with 32-bit wraparound
fn tag_hash(tag: &str) -> i32 {
    tag.encode_utf16().fold(0i32, |hash, code| {
        (code as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Pick the palette color for a tag
pub fn tag_color(tag: &str) -> &'static str {
    let index = tag_hash(tag).unsigned_abs() as usize % PALETTE.len();
    PALETTE[index]
}
