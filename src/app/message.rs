// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::photo::Photo;
use crate::error::Error;
use crate::ui::filter_bar;
use crate::ui::library_panel;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result from the asynchronous startup library load.
    LibraryLoaded(Result<Vec<Photo>, Error>),
    LibraryPanel(library_panel::Message),
    FilterBar(filter_bar::Message),
    /// Select the next visible photo (Right/Down arrow).
    SelectNext,
    /// Select the previous visible photo (Left/Up arrow).
    SelectPrevious,
    /// Drop the selection back to the placeholder (Escape).
    ClearSelection,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `uk`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file or photo directory to load on startup.
    pub library_path: Option<String>,
}
