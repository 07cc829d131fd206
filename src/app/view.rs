// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the filter bar across the top with the library sidebar and the
//! details pane below it.

use super::{App, Message};
use crate::error::Error;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::filter_bar::{self, ViewContext as FilterBarContext};
use crate::ui::library_panel::{self, ViewContext as LibraryPanelContext};
use crate::ui::photo_details::{self, ViewContext as PhotoDetailsContext};
use iced::widget::{Column, Row, Text};
use iced::{Element, Length};

/// Renders the application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let filter_bar = filter_bar::view(FilterBarContext {
        i18n: &app.i18n,
        state: &app.filter_bar,
    })
    .map(Message::FilterBar);

    let sidebar = library_panel::view(LibraryPanelContext {
        i18n: &app.i18n,
        library: &app.library,
    })
    .map(Message::LibraryPanel);

    let details = photo_details::view(PhotoDetailsContext {
        i18n: &app.i18n,
        photo: app.library.selected_photo(),
    });

    let mut column = Column::new().spacing(spacing::SM).padding(spacing::SM);

    if let Some(error) = &app.load_error {
        column = column.push(error_line(app, error));
    }

    column
        .push(filter_bar)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(sidebar)
                .push(details)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Localized one-line description of a library load failure.
fn error_line<'a>(app: &'a App, error: &'a Error) -> Element<'a, Message> {
    let text = match error {
        Error::Catalog(catalog_error) => app.i18n.tr(catalog_error.i18n_key()),
        _ => app.i18n.tr("error-load-failed"),
    };

    Text::new(text)
        .size(typography::BODY)
        .color(palette::ERROR_500)
        .into()
}
