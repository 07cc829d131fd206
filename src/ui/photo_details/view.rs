// SPDX-License-Identifier: MPL-2.0
//! View rendering for the photo details pane.

use super::{DetailsContent, PhotoDetails};
use crate::domain::photo::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{container, rule, scrollable, Column, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the details pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The selected photo, if any. The pane only borrows it for this
    /// render pass.
    pub photo: Option<&'a Photo>,
}

/// Render the details pane.
///
/// The pane emits no messages, so it renders for any parent message type.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match DetailsContent::from_photo(ctx.photo) {
        DetailsContent::Placeholder => placeholder(ctx.i18n),
        DetailsContent::Photo(details) => photo_details(ctx.i18n, details),
    }
}

/// The "nothing selected" branch: a single centered line of text.
fn placeholder<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let line = Text::new(i18n.tr("details-empty-placeholder"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    container(line)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// The selected-photo branch: heading, image, tag list, metadata.
fn photo_details<'a, Message: 'a>(i18n: &I18n, details: PhotoDetails<'a>) -> Element<'a, Message> {
    let heading = Text::new(details.name.to_string()).size(typography::TITLE_LG);

    // The image never exceeds the pane width and scales down
    // proportionally, never up.
    let image = Image::new(Handle::from_path(details.source))
        .content_fit(ContentFit::ScaleDown)
        .width(Length::Fill);

    let tags_heading = Text::new(i18n.tr("details-tags-heading")).size(typography::TITLE_SM);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(image)
        .push(tags_heading)
        .push(tag_list(details.tags));

    if details.has_metadata() {
        content = content
            .push(rule::horizontal(1))
            .push(metadata_section(i18n, &details));
    }

    let panel = container(content.width(Length::Fill).padding(spacing::LG))
        .width(Length::Fill)
        .style(styles::container::panel);

    scrollable(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One bulleted row per tag, preserving the sequence order.
fn tag_list<'a, Message: 'a>(tags: &'a [String]) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XXS);

    for tag in tags {
        list = list.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new("•").size(typography::BODY))
                .push(Text::new(tag.as_str()).size(typography::BODY)),
        );
    }

    list.into()
}

/// Label/value rows for the optional capture metadata.
fn metadata_section<'a, Message: 'a>(
    i18n: &I18n,
    details: &PhotoDetails<'a>,
) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("details-metadata-heading")).size(typography::TITLE_SM);

    let mut rows = Column::new().spacing(spacing::XS);
    for (label_key, value) in details.metadata_rows() {
        rows = rows.push(metadata_row(i18n.tr(label_key), value.to_string()));
    }

    Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(rows)
        .into()
}

fn metadata_row<'a, Message: 'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(format!("{}:", label))
                .size(typography::BODY)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new(value)
                .size(typography::BODY)
                .width(Length::FillPortion(3)),
        )
        .into()
}
