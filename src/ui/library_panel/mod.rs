// SPDX-License-Identifier: MPL-2.0
//! Library sidebar listing the visible photos.
//!
//! The sidebar is the selection owner's face: it shows the filtered photo
//! list, highlights the selected row, and asks the application to change
//! the selection when a row is pressed. It never touches the library
//! directly; messages go up, state comes down.

pub mod view;

pub use view::{view, ViewContext};

/// Messages emitted by the library panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A photo row was pressed. Carries the library index.
    PhotoPressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Request to select the photo at the given library index.
    SelectionRequested(usize),
}

/// Process a library panel message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::PhotoPressed(index) => Event::SelectionRequested(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressing_a_row_requests_selection() {
        let event = update(Message::PhotoPressed(4));
        assert_eq!(event, Event::SelectionRequested(4));
    }
}
