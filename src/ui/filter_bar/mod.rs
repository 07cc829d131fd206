// SPDX-License-Identifier: MPL-2.0
//! Filter bar for narrowing the photo library.
//!
//! Holds the raw text of the search and tag inputs and derives a
//! [`PhotoFilter`] from them. The tag input is a comma-separated list;
//! entries are trimmed and blanks dropped. Every edit emits the derived
//! filter so the application can apply it to the library immediately.

pub mod view;

pub use view::{view, ViewContext};

use crate::domain::photo::PhotoFilter;

/// Messages emitted by the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The free-text search input changed.
    QueryChanged(String),
    /// The comma-separated tag input changed.
    TagsChanged(String),
    /// Reset all filter inputs.
    Clear,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The derived filter changed; the library should re-apply it.
    FilterChanged(PhotoFilter),
}

/// Raw input state of the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBarState {
    /// Free-text search, matched against photo names and tags.
    pub query: String,
    /// Comma-separated tag list, all of which a photo must carry.
    pub tags_input: String,
}

impl FilterBarState {
    /// Creates an empty filter bar state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the photo filter from the current inputs.
    #[must_use]
    pub fn to_filter(&self) -> PhotoFilter {
        let mut filter = PhotoFilter::default();
        filter.tags = parse_tag_list(&self.tags_input);

        let query = self.query.trim();
        if !query.is_empty() {
            filter.query = Some(query.to_string());
        }

        filter
    }
}

/// Splits a comma-separated tag list, trimming entries and dropping blanks.
fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Process a filter bar message and return the corresponding event.
pub fn update(state: &mut FilterBarState, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => state.query = query,
        Message::TagsChanged(tags) => state.tags_input = tags,
        Message::Clear => *state = FilterBarState::default(),
    }
    Event::FilterChanged(state.to_filter())
}
