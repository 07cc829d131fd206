// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard navigation works regardless of focus: arrow keys walk the
//! visible photo list and Escape returns to the placeholder.

use super::Message;
use iced::keyboard::{self, key::Named, Event, Key};
use iced::Subscription;

pub fn keyboard_navigation() -> Subscription<Message> {
    keyboard::listen().filter_map(|event| match event {
        Event::KeyPressed { key, .. } => match key {
            Key::Named(Named::ArrowRight) | Key::Named(Named::ArrowDown) => {
                Some(Message::SelectNext)
            }
            Key::Named(Named::ArrowLeft) | Key::Named(Named::ArrowUp) => {
                Some(Message::SelectPrevious)
            }
            Key::Named(Named::Escape) => Some(Message::ClearSelection),
            _ => None,
        },
        _ => None,
    })
}
