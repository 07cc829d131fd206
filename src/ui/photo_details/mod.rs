// SPDX-License-Identifier: MPL-2.0
//! Details pane for the selected photo.
//!
//! This component is purely presentational: it renders the name, the image,
//! and the tag list of the photo it is handed, or a placeholder line when
//! none is selected. It holds no state, emits no messages, and never
//! mutates the photo it borrows.
//!
//! The widget tree is built from [`DetailsContent`], a pure projection of
//! the optional photo reference. Keeping the projection separate from the
//! rendering keeps the pane's contract testable without a renderer.

pub mod view;

pub use view::{view, ViewContext};

use crate::domain::photo::Photo;
use std::path::Path;

/// What the details pane shows for a given input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsContent<'a> {
    /// No photo selected; the pane shows only the placeholder line.
    Placeholder,
    /// A photo is selected.
    Photo(PhotoDetails<'a>),
}

/// Borrowed fields of the selected photo, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDetails<'a> {
    pub name: &'a str,
    pub source: &'a Path,
    pub tags: &'a [String],
    pub date_taken: Option<&'a str>,
    pub camera_model: Option<&'a str>,
    pub location: Option<&'a str>,
}

impl<'a> DetailsContent<'a> {
    /// Projects an optional photo reference into pane content.
    ///
    /// This is a pure function of its input: the same reference always
    /// projects to the same content.
    #[must_use]
    pub fn from_photo(photo: Option<&'a Photo>) -> Self {
        match photo {
            None => DetailsContent::Placeholder,
            Some(photo) => DetailsContent::Photo(PhotoDetails {
                name: &photo.name,
                source: &photo.source,
                tags: &photo.tags,
                date_taken: photo.date_taken.as_deref(),
                camera_model: photo.camera_model.as_deref(),
                location: photo.location.as_deref(),
            }),
        }
    }
}

impl<'a> PhotoDetails<'a> {
    /// Metadata rows shown below the tag list, as (i18n label key, value)
    /// pairs. Absent fields produce no row.
    #[must_use]
    pub fn metadata_rows(&self) -> Vec<(&'static str, &'a str)> {
        let mut rows = Vec::new();
        if let Some(date) = self.date_taken {
            rows.push(("details-label-date-taken", date));
        }
        if let Some(camera) = self.camera_model {
            rows.push(("details-label-camera", camera));
        }
        if let Some(location) = self.location {
            rows.push(("details-label-location", location));
        }
        rows
    }

    /// Whether the metadata section renders at all.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        !self.metadata_rows().is_empty()
    }
}
