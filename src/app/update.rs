// SPDX-License-Identifier: MPL-2.0
//! State transitions for the application.
//!
//! All messages funnel through [`update`]; component messages are first
//! translated into their events and then applied to the library.

use super::{App, Message};
use crate::library::PhotoLibrary;
use crate::ui::{filter_bar, library_panel};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::LibraryLoaded(Ok(photos)) => {
            app.library = PhotoLibrary::from_photos(photos);
            app.load_error = None;
        }
        Message::LibraryLoaded(Err(error)) => {
            app.load_error = Some(error);
        }
        Message::LibraryPanel(message) => match library_panel::update(message) {
            library_panel::Event::SelectionRequested(index) => app.library.select(index),
        },
        Message::FilterBar(message) => {
            let filter_bar::Event::FilterChanged(filter) =
                filter_bar::update(&mut app.filter_bar, message);
            app.library.set_filter(filter);
        }
        Message::SelectNext => app.library.select_next(),
        Message::SelectPrevious => app.library.select_previous(),
        Message::ClearSelection => app.library.clear_selection(),
    }

    Task::none()
}
