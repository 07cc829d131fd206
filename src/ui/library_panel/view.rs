// SPDX-License-Identifier: MPL-2.0
//! View rendering for the library sidebar.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::library::PhotoLibrary;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a PhotoLibrary,
}

/// Render the library sidebar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("library-heading")).size(typography::TITLE_SM);

    let visible = ctx.library.visible();
    let selected = ctx.library.selected_index();

    let body: Element<'a, Message> = if ctx.library.is_empty() {
        empty_line(ctx.i18n.tr("library-empty"))
    } else if visible.is_empty() {
        empty_line(ctx.i18n.tr("library-no-matches"))
    } else {
        let mut rows = Column::new().spacing(spacing::XXS);
        for index in &visible {
            rows = rows.push(photo_row(&ctx, *index, selected == Some(*index)));
        }
        scrollable(rows).height(Length::Fill).into()
    };

    let footer = Text::new(ctx.i18n.tr_with_args(
        "library-count",
        &[
            ("shown", &visible.len().to_string()),
            ("total", &ctx.library.len().to_string()),
        ],
    ))
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(heading)
        .push(body)
        .push(footer);

    container(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

fn empty_line<'a>(text: String) -> Element<'a, Message> {
    container(
        Text::new(text)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .height(Length::Fill)
    .padding(spacing::XS)
    .into()
}

/// One pressable row: photo name plus a tag count badge.
fn photo_row<'a>(ctx: &ViewContext<'a>, index: usize, is_selected: bool) -> Element<'a, Message> {
    let Some(photo) = ctx.library.get(index) else {
        return Column::new().into();
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(photo.name.as_str())
                .size(typography::BODY)
                .width(Length::Fill),
        );

    if !photo.tags.is_empty() {
        row = row.push(Text::new(photo.tags.len().to_string()).size(typography::CAPTION));
    }

    let style = if is_selected {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(style)
        .on_press(Message::PhotoPressed(index))
        .into()
}
