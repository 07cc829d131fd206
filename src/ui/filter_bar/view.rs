// SPDX-License-Identifier: MPL-2.0
//! View rendering for the filter bar.

use super::{FilterBarState, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, text_input, Row};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the filter bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a FilterBarState,
}

/// Render the filter bar: search input, tag input, and a clear button
/// while any filter is active.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let search = text_input(
        &ctx.i18n.tr("filter-search-placeholder"),
        &ctx.state.query,
    )
    .on_input(Message::QueryChanged)
    .padding(spacing::XS)
    .size(typography::BODY)
    .width(Length::FillPortion(3));

    let tags = text_input(&ctx.i18n.tr("filter-tags-placeholder"), &ctx.state.tags_input)
        .on_input(Message::TagsChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::FillPortion(2));

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(search)
        .push(tags);

    if ctx.state.to_filter().is_active() {
        bar = bar.push(
            button(text(ctx.i18n.tr("filter-clear")).size(typography::BODY))
                .on_press(Message::Clear)
                .padding(spacing::XS),
        );
    }

    bar.into()
}
