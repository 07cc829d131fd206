// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the library, the filter
//! bar, and the details pane.
//!
//! The `App` struct wires together the domains (library, localization,
//! filtering) and translates messages into state changes and side effects
//! like the asynchronous library load. Policy decisions (window sizing,
//! theme detection, keyboard bindings) stay close to the main update loop so
//! user-facing behavior is easy to audit.

pub mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::library::{self, PhotoLibrary};
use crate::ui::filter_bar::FilterBarState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging UI components, localization, and
/// the photo library.
pub struct App {
    pub i18n: I18n,
    library: PhotoLibrary,
    filter_bar: FilterBarState,
    /// Failure from the startup library load, rendered above the filter bar.
    load_error: Option<Error>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.library.len())
            .field("has_selection", &self.library.selected_photo().is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            library: PhotoLibrary::new(),
            filter_bar: FilterBarState::new(),
            load_error: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous library
    /// load when a path was given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let sort_order = config.sort_order.unwrap_or_default();

        let app = App {
            i18n,
            ..Self::default()
        };

        let task = match flags.library_path {
            Some(path) => {
                let path = PathBuf::from(path);
                Task::perform(
                    async move { library::load_from_path(&path, sort_order) },
                    Message::LibraryLoaded,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        // Follow the OS preference; default to dark on detection errors.
        if matches!(dark_light::detect(), Ok(dark_light::Mode::Light)) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::keyboard_navigation()
    }
}
