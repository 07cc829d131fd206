// SPDX-License-Identifier: MPL-2.0
//! Core photo types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

pub mod filter;

pub use filter::PhotoFilter;

use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Timestamp format used by catalog entries (`YYYY-MM-DD HH:MM:SS`).
const DATE_TAKEN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A photo in the library.
///
/// A `Photo` is a read-only value owned by the library; the UI only ever
/// borrows one for the duration of a single render pass. `tags` is a
/// required, possibly empty, ordered sequence — a catalog entry without
/// tags produces an empty list, never a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Display name, required.
    pub name: String,
    /// Location of the image content, resolved by the UI runtime's
    /// native image loader.
    pub source: PathBuf,
    /// Ordered tag labels; duplicates are not rejected.
    pub tags: Vec<String>,
    /// Capture timestamp in `YYYY-MM-DD HH:MM:SS` form, when known.
    pub date_taken: Option<String>,
    /// Camera model string, when known.
    pub camera_model: Option<String>,
    /// Free-form location label, when known.
    pub location: Option<String>,
}

impl Photo {
    /// Creates a photo with the given name and source and no metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            tags: Vec::new(),
            date_taken: None,
            camera_model: None,
            location: None,
        }
    }

    /// Builder-style helper to attach tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns `true` if the photo carries the given tag, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Parses the capture date out of `date_taken`.
    ///
    /// Accepts the full `YYYY-MM-DD HH:MM:SS` form as well as a bare
    /// `YYYY-MM-DD`. Returns `None` when the field is absent or does not
    /// parse.
    #[must_use]
    pub fn capture_date(&self) -> Option<NaiveDate> {
        let raw = self.date_taken.as_deref()?;
        NaiveDateTime::parse_from_str(raw, DATE_TAKEN_FORMAT)
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Returns the file stem of `path` as a display name, falling back to
    /// the whole file name for stem-less paths.
    #[must_use]
    pub fn name_from_path(path: &Path) -> String {
        path.file_stem()
            .or_else(|| path.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
