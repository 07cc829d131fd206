// SPDX-License-Identifier: MPL-2.0
//! Photo filtering types for the domain layer.
//!
//! This module contains pure filter logic without I/O. All criteria combine
//! with AND semantics: every active criterion must match for a photo to be
//! included, and an empty filter matches everything.
//!
//! # Available Criteria
//!
//! - Tags: the photo must carry *all* listed tags
//! - Date range: inclusive bounds on the capture date
//! - Camera model and location: case-insensitive substring match
//! - Query: keyword search over the photo name and its tags

use super::Photo;
use chrono::NaiveDate;

/// Combined photo filter with AND logic.
///
/// When no criteria are active, all photos match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoFilter {
    /// Tags the photo must all carry, compared ignoring case.
    pub tags: Vec<String>,
    /// Start of the capture date range (inclusive).
    pub date_from: Option<NaiveDate>,
    /// End of the capture date range (inclusive).
    pub date_to: Option<NaiveDate>,
    /// Camera model substring, compared ignoring case.
    pub camera_model: Option<String>,
    /// Location substring, compared ignoring case.
    pub location: Option<String>,
    /// Free-text query; every word must occur in the name or a tag.
    pub query: Option<String>,
}

impl PhotoFilter {
    /// Creates a filter with no active criteria (matches all photos).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the photo satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, photo: &Photo) -> bool {
        self.matches_tags(photo)
            && self.matches_date(photo)
            && self.matches_camera(photo)
            && self.matches_location(photo)
            && self.matches_query(photo)
    }

    fn matches_tags(&self, photo: &Photo) -> bool {
        self.tags.iter().all(|tag| photo.has_tag(tag))
    }

    fn matches_date(&self, photo: &Photo) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }

        // A photo without a parseable capture date never matches an
        // active date bound.
        let Some(date) = photo.capture_date() else {
            return false;
        };

        if let Some(from) = self.date_from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if date > to {
                return false;
            }
        }
        true
    }

    fn matches_camera(&self, photo: &Photo) -> bool {
        match &self.camera_model {
            Some(needle) => photo
                .camera_model
                .as_deref()
                .is_some_and(|model| contains_ignore_case(model, needle)),
            None => true,
        }
    }

    fn matches_location(&self, photo: &Photo) -> bool {
        match &self.location {
            Some(needle) => photo
                .location
                .as_deref()
                .is_some_and(|location| contains_ignore_case(location, needle)),
            None => true,
        }
    }

    fn matches_query(&self, photo: &Photo) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };

        query.split_whitespace().all(|word| {
            contains_ignore_case(&photo.name, word)
                || photo.tags.iter().any(|tag| contains_ignore_case(tag, word))
        })
    }

    /// Returns `true` if any criterion is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Returns the number of active criteria.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.tags.is_empty() {
            count += 1;
        }
        if self.date_from.is_some() || self.date_to.is_some() {
            count += 1;
        }
        if self.camera_model.is_some() {
            count += 1;
        }
        if self.location.is_some() {
            count += 1;
        }
        if self.query.as_deref().is_some_and(|q| !q.trim().is_empty()) {
            count += 1;
        }
        count
    }

    /// Resets all criteria to their default (inactive) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// =============================================================================
// Tests
// =============================================================================
