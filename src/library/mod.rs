// SPDX-License-Identifier: MPL-2.0
//! Photo library: the ordered photo collection, the selection state, and
//! filtered navigation over it.
//!
//! The library is the single source of truth shared by the sidebar and the
//! details pane. Selection is stored as an index into the full photo list;
//! a selection hidden by the active filter is simply not reported, so
//! relaxing the filter brings it back.

pub mod catalog;
pub mod scanner;

use crate::config::SortOrder;
use crate::domain::photo::{Photo, PhotoFilter};
use crate::error::{CatalogError, Result};
use std::path::Path;

/// Loads a photo library from a path given on the command line.
///
/// A directory is scanned for image files; a `.toml` file is read as a
/// photo catalog. Anything else is rejected.
pub fn load_from_path(path: &Path, sort_order: SortOrder) -> Result<Vec<Photo>> {
    if path.is_dir() {
        return scanner::scan_directory(path, sort_order);
    }
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml")) {
        return catalog::load_catalog(path);
    }
    Err(CatalogError::UnsupportedPath(path.display().to_string()).into())
}

/// Ordered photo collection with selection and filtering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotoLibrary {
    photos: Vec<Photo>,
    selected: Option<usize>,
    filter: PhotoFilter,
}

impl PhotoLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library holding the given photos, nothing selected.
    #[must_use]
    pub fn from_photos(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            selected: None,
            filter: PhotoFilter::default(),
        }
    }

    /// Returns all photos in library order, ignoring the filter.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Returns the total number of photos, ignoring the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Checks if the library holds no photos at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> &PhotoFilter {
        &self.filter
    }

    /// Replaces the active filter. The stored selection index is kept, but
    /// a selection the new filter hides is no longer reported.
    pub fn set_filter(&mut self, filter: PhotoFilter) {
        self.filter = filter;
    }

    /// Returns the indices of photos matching the filter, in library order.
    #[must_use]
    pub fn visible(&self) -> Vec<usize> {
        self.photos
            .iter()
            .enumerate()
            .filter(|(_, photo)| self.filter.matches(photo))
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns the photo at `index`, ignoring the filter.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Selects the photo at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.photos.len() {
            self.selected = Some(index);
        }
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns the selected index, or `None` when nothing is selected or
    /// the selection is hidden by the filter.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let index = self.selected?;
        let photo = self.photos.get(index)?;
        self.filter.matches(photo).then_some(index)
    }

    /// Returns the selected photo, or `None` when nothing is selected or
    /// the selection is hidden by the filter.
    #[must_use]
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.selected_index().and_then(|index| self.photos.get(index))
    }

    /// Selects the next visible photo, wrapping to the first after the last.
    /// With no current selection, selects the first visible photo.
    pub fn select_next(&mut self) {
        let visible = self.visible();
        if visible.is_empty() {
            return;
        }

        let next = match self.visible_position(&visible) {
            Some(pos) => visible[(pos + 1) % visible.len()],
            None => visible[0],
        };
        self.selected = Some(next);
    }

    /// Selects the previous visible photo, wrapping to the last before the
    /// first. With no current selection, selects the last visible photo.
    pub fn select_previous(&mut self) {
        let visible = self.visible();
        if visible.is_empty() {
            return;
        }

        let previous = match self.visible_position(&visible) {
            Some(pos) => visible[(pos + visible.len() - 1) % visible.len()],
            None => visible[visible.len() - 1],
        };
        self.selected = Some(previous);
    }

    /// Position of the reported selection within the visible list.
    fn visible_position(&self, visible: &[usize]) -> Option<usize> {
        let selected = self.selected_index()?;
        visible.iter().position(|&index| index == selected)
    }
}
