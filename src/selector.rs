//! Incremental tag picker used on the home page.
//!
//! The widget owns the input text, the suggestion popup and the selected
//! chips. Callers feed it [`SelectorEvent`]s one at a time; the only thing it
//! hands back is an optional [`Navigation`] to the search page.

use log::debug;
use serde::Serialize;

use crate::navigation::{search_url, Navigation};
use crate::tags::normalize_tag;

/// Keys the input field reports on key-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Semantic UI events the selector reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    TextChanged(String),
    CandidateSelected(String),
    ChipRemoved(String),
    KeySubmitted(Key),
}

/// Popup state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "candidates", rename_all = "lowercase")]
pub enum Popup {
    #[default]
    Idle,
    Suggesting(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
pub struct TagSelector {
    #[serde(skip)]
    available: Vec<String>,
    input: String,
    popup: Popup,
    selected: Vec<String>,
}

impl TagSelector {
    /// `available` is the unique tag set the suggestions are drawn from
    pub fn new(available: Vec<String>) -> Self {
        Self {
            available,
            input: String::new(),
            popup: Popup::Idle,
            selected: Vec::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn handle(&mut self, event: SelectorEvent) -> Option<Navigation> {
        match event {
            SelectorEvent::TextChanged(text) => {
                self.text_changed(text);
                None
            }
            SelectorEvent::CandidateSelected(tag) => {
                self.add(tag);
                None
            }
            SelectorEvent::ChipRemoved(tag) => {
                self.remove(&tag);
                None
            }
            SelectorEvent::KeySubmitted(key) => self.submit(key),
        }
    }

    fn text_changed(&mut self, text: String) {
        let needle = normalize_tag(&text);
        self.input = text;

        if needle.is_empty() {
            self.popup = Popup::Idle;
            return;
        }

        let candidates = self.candidates(&needle);
        self.popup = if candidates.is_empty() {
            Popup::Idle
        } else {
            Popup::Suggesting(candidates)
        };
    }

    fn candidates(&self, needle: &str) -> Vec<String> {
        self.available
            .iter()
            .filter(|t| t.to_lowercase().contains(needle) && !self.selected.contains(*t))
            .cloned()
            .collect()
    }

    fn add(&mut self, tag: String) {
        if !self.selected.contains(&tag) {
            debug!("Selected tag '{}'", tag);
            self.selected.push(tag);
        }
        self.input.clear();
        self.popup = Popup::Idle;
    }

    fn remove(&mut self, tag: &str) {
        self.selected.retain(|t| t != tag);
    }

    fn submit(&self, key: Key) -> Option<Navigation> {
        if key != Key::Enter || self.selected.is_empty() {
            return None;
        }
        Some(Navigation::Location(search_url(&self.selected)))
    }
}
